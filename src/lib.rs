#![allow(dead_code)]

pub mod hex;

pub mod prelude {
    pub use super::hex::prelude::*;
}
