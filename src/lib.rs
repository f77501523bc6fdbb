//! Single-currency account ledger core.
//!
//! The [`domain`] module holds the posting protocol: accounts, the
//! transaction variants, and the balance-mutation rules (4-decimal rounding,
//! insufficient-balance rejection, approval codes, append-only history).
//! Around it sit the collaborators: [`storage`] for lookup and persistence,
//! [`service`] for the validating caller layer, [`audit`] for the
//! best-effort log side channel, and [`io`]/[`app`] for the CSV batch
//! front-end.

pub mod app;
pub mod audit;
pub mod config;
pub mod domain;
pub mod io;
pub mod prelude;
pub mod service;
pub mod storage;
