//! Classic procedural drills: a linked-list toolkit plus the small
//! exercises that usually surround it (sorting, recursion, searching,
//! primes, string handling, a student registry and a spiral walk).
//!
//! Every exercise is a plain function or small type so the console driver
//! stays a thin layer over the library.
pub mod config;
pub mod list;
pub mod matrix;
pub mod primes;
pub mod records;
pub mod recursion;
pub mod search;
pub mod sort;
pub mod strings;
