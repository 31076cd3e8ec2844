//! Record stream formats for card decks.

pub mod csv;
