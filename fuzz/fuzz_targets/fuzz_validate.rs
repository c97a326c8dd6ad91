#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let documents = match podcheck::parse(&s) {
        Ok(documents) => documents,
        Err(_) => return,
    };

    for doc in &documents {
        let first = podcheck::validate(doc, "fuzz.yaml");
        let second = podcheck::validate(doc, "fuzz.yaml");

        // Validation must be deterministic for a fixed tree.
        if first != second {
            panic!(
                "Non-deterministic validation.\nInput (lossy): {:?}\nFirst: {:?}\nSecond: {:?}",
                s.get(..200).unwrap_or(&s),
                first,
                second,
            );
        }
    }
});
