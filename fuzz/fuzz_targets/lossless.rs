#![no_main]

use libfuzzer_sys::fuzz_target;

use mathspan::{scan_inline, Options, Segment};

// Every input must be reproduced exactly by the sources of its segments, and
// no math span may cross a line break.
fuzz_target!(|i: (&str, Options)| {
    let (s, options) = i;
    let segments = scan_inline(s, &options);

    let rebuilt: String = segments.iter().map(Segment::source).collect();
    assert_eq!(rebuilt, s);

    for segment in &segments {
        if let Segment::Math(span) = segment {
            assert!(!span.source.contains('\n'));
            assert!(!span.content.is_empty());
        }
    }
});
