//! The prediction submission cycle: payload collection, HTTP dispatch, and
//! outcome rendering.

pub mod client;
pub mod outcome;
pub mod payload;
