#![no_main]

use libfuzzer_sys::fuzz_target;
use segver::Version;

fuzz_target!(|data: &str| {
    if let Ok(version) = Version::new(data) {
        let reparsed = Version::new(version.to_string()).expect("canonical form must parse");
        assert_eq!(version, reparsed);
        assert_eq!(version.metadata(), reparsed.metadata());
    }
});
