//! Fuzz target for the DSN parser.
//!
//! Feeds arbitrary strings to the parser and checks that it never panics
//! and that every accepted DSN upholds the value invariants.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_dsn_parser
//! ```

#![no_main]

use dsnkit_core::Dsn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(dsn) = Dsn::parse(input) {
        assert_eq!(dsn.as_str(), input);
        assert!(!dsn.protocol().is_empty());
        assert!(!dsn.hosts().is_empty());
        assert!(dsn.hosts().iter().all(|h| !h.host().is_empty()));
        assert!(dsn.options().keys().all(|k| !k.is_empty()));

        // display must not panic on any accepted input
        let _ = dsn.to_string();
    }
});
