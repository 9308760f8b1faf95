#![no_main]
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;
use mathspan::{markdown_to_html, Options};
use std::time::{Duration, Instant};

// A fuzz target which discovers quadratic scanning behaviour.  Instead of
// trying to uncover memory errors, it measures the scan time of fuzz inputs
// as they are doubled in size, and panics if the time per byte keeps growing.

/// Markdown input to the fuzzer.  Unclosed openers are the usual cause of
/// quadratic scanning, so inputs are built by repeating short fragments.
#[derive(Arbitrary, Debug)]
enum Markdown {
    // <markdown>*N, e.g. `$a $a $a `
    Repeat { markdown: String },

    // <prefix>*N + <markdown> + <suffix>*N, e.g. `\(\(\(x\)\)\)`
    Sandwich {
        prefix: String,
        markdown: String,
        suffix: String,
    },
}

impl Markdown {
    /// Expand the markdown input into a string of up to `num_bytes`.
    fn render(&self, num_bytes: usize) -> String {
        let output = match self {
            Markdown::Repeat { markdown } => markdown.repeat(num_bytes / markdown.len()),
            Markdown::Sandwich {
                prefix,
                markdown,
                suffix,
            } => {
                let mut output = String::with_capacity(num_bytes);
                if markdown.len() <= num_bytes {
                    let iterations = (num_bytes - markdown.len()) / (prefix.len() + suffix.len());
                    output.push_str(&prefix.repeat(iterations));
                    output.push_str(markdown);
                    output.push_str(&suffix.repeat(iterations));
                }
                output
            }
        };

        assert!(output.len() <= num_bytes);
        output
    }

    fn should_fuzz_string(s: &str) -> bool {
        !s.is_empty() && s.len() <= 128
    }

    /// Skip inputs which cannot be expanded usefully.
    fn should_fuzz(&self) -> bool {
        match self {
            Markdown::Repeat { markdown } => Markdown::should_fuzz_string(markdown),
            Markdown::Sandwich {
                prefix,
                markdown,
                suffix,
            } => {
                Markdown::should_fuzz_string(prefix)
                    && Markdown::should_fuzz_string(markdown)
                    && Markdown::should_fuzz_string(suffix)
            }
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    options: Options,
    markdown: Markdown,
}

fn fuzz_one_input(input: &Input, num_bytes: usize) -> (usize, Duration, f64) {
    let markdown = input.markdown.render(num_bytes);

    let now = Instant::now();
    let _ = markdown_to_html(&markdown, &input.options);
    let duration = now.elapsed();

    let byte_length = markdown.len().max(1);
    let duration_per_byte = duration.as_secs_f64() / (byte_length as f64);
    (byte_length, duration, duration_per_byte)
}

/// The maximum number of doublings to run.
const MAX_STEPS: usize = 3;

/// The minimum ratio of time per byte between steps that we consider to be
/// quadratic.  A ratio of 2.0 would be exactly quadratic; startup costs and
/// jitter on small inputs make a margin necessary.
const MIN_RATIO: f64 = 2.5f64;

fuzz_target!(|input: Input| {
    if !input.markdown.should_fuzz() {
        return;
    }

    let mut num_bytes = 1024;
    let (byte_length, _, mut last_duration) = fuzz_one_input(&input, num_bytes);
    let mut byte_lengths = vec![byte_length];
    let mut duration_per_bytes = vec![last_duration];

    for _ in 0..MAX_STEPS {
        num_bytes *= 2;
        let (byte_length, _, duration_per_byte) = fuzz_one_input(&input, num_bytes);

        if duration_per_byte / last_duration < MIN_RATIO {
            return;
        }

        byte_lengths.push(byte_length);
        duration_per_bytes.push(duration_per_byte);
        last_duration = duration_per_byte;
    }

    println!(
        "duration_per_bytes = {:?}, byte_lengths = {:?}",
        duration_per_bytes, byte_lengths
    );
    println!("{:#?}", input);
    panic!()
});
