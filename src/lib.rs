//! dipkit: a set-associative cache simulator for the Dynamic Insertion
//! Policy (DIP).
//!
//! DIP runs two replacement policies side by side — classic LRU and the
//! thrash-resistant Bimodal Insertion Policy (BIP) — on a handful of
//! dedicated *leader* sets, and routes the remaining *follower* sets to
//! whichever policy is currently missing less, as tracked by a single
//! saturating selector counter (PSEL).
//!
//! ```text
//!   address ──► decode ──► classify set ──► policy dispatch ──► hit/miss
//!                (set, tag)   │
//!                             ├── LRU leader  → LRU,  miss bumps PSEL up
//!                             ├── BIP leader  → BIP,  miss bumps PSEL down
//!                             └── follower    → PSEL ≤ 512 ? LRU : BIP
//! ```
//!
//! Start from [`simulator::DipSimulator::builder`]; see the module docs for
//! the individual pieces.

pub mod builder;
pub mod ds;
pub mod error;
pub mod geometry;
pub mod policy;
pub mod simulator;
pub mod stats;

pub mod prelude;
