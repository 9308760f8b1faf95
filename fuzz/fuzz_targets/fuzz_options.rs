#![no_main]

use libfuzzer_sys::fuzz_target;

use mathspan::{markdown_to_html, markdown_to_xml, Options};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput<'s> {
    s: &'s str,
    opts: Options,
}

fuzz_target!(|i: FuzzInput| {
    markdown_to_html(i.s, &i.opts);
    markdown_to_xml(i.s, &i.opts);
});
