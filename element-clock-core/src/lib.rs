//! Display and timekeeping logic for the element clock
//!
//! Everything here is independent of the board: the font and element
//! tables, symbol selection, the blink and time bases, and the bit-banged
//! shift-register protocol over `embedded-hal` pins.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod blink;
pub mod clock;
pub mod config;
pub mod controls;
pub mod deadline;
pub mod elements;
pub mod font;
pub mod render;
pub mod shift_register;
pub mod symbols;
