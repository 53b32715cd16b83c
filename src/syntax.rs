//! TAML Format Reference
//!
//! This module documents the TAML text format as read and written by this
//! library. It contains no code.
//!
//! # Overview
//!
//! TAML is a configuration format for files edited by hand. Structure comes
//! from tab characters alone: one tab separates a key from its value, and
//! leading tabs nest a line under the section above it.
//!
//! ```text
//! application	demo
//! server
//! 	host	localhost
//! 	port	8080
//! 	tls
//! 		enabled	true
//! ```
//!
//! # Lines
//!
//! Input is split on `\n`; a trailing `\r` is dropped, so CRLF files read the
//! same as LF files. Each line is then classified:
//!
//! | Shape | Meaning |
//! |-------|---------|
//! | blank or whitespace only | ignored, does not close any section |
//! | `<tabs>key<TAB>value` | a key/value entry |
//! | `<tabs>key` | opens a section; following deeper lines belong to it |
//!
//! The number of leading tabs is the line's depth. Only the first tab after the
//! key separates; further tabs stay part of the value. Keys are kept exactly as
//! written, surrounding spaces included.
//!
//! ## Values
//!
//! Values are text. There are no quotes, escapes or type markers: `42`, `true`
//! and `2024-01-15` are all stored as strings and interpreted when read through
//! [`Document::get_value`](crate::Document::get_value) or serde. An empty value
//! (`key<TAB>`) is the empty string.
//!
//! ## Nesting
//!
//! A line belongs to the nearest preceding section line with a smaller depth.
//! Indentation is relative: a line indented several levels past its section is
//! still that section's child, and a first line with leading tabs lands at the
//! top level. [`parse`](crate::parse) never rejects input;
//! [`validate`](crate::validate()) and [`parse_strict`](crate::parse_strict)
//! report such lines instead.
//!
//! # Keys
//!
//! Keys compare case-insensitively. `Port`, `port` and `PORT` name one entry;
//! the casing written first is the one kept, and when a key repeats the later
//! value wins.
//!
//! # Lists
//!
//! The text format has no list syntax. Lists built in code are written as a
//! section keyed by element index:
//!
//! ```text
//! tags
//! 	0	web
//! 	1	api
//! ```
//!
//! Reading that text back gives a section, which serde can still deserialize
//! into a `Vec`.
//!
//! # Flattened paths
//!
//! [`Document::flatten`](crate::Document::flatten) joins keys with `:`, giving
//! `server:tls:enabled = true` for the example above. List elements contribute
//! their index: `tags:1 = api`.
//!
//! # Limitations
//!
//! - no comments;
//! - values cannot contain a newline, and a tab inside a value is flagged by the
//!   validator;
//! - keys cannot contain a tab.
