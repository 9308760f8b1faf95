//! Configuration for the scanners.

#[cfg(feature = "bon")]
use bon::Builder;

use crate::parser::boundary::BoundaryRules;

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Select which delimiter families are recognized.
    pub extension: Extension,

    /// Configure scan-time options.
    pub parse: Parse,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options to select delimiter families.
pub struct Extension {
    /// Recognize `$...$` and `$$...$$`, inline and as whole-line blocks.
    ///
    /// ```rust
    /// # use mathspan::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("$a$\n", &options),
    ///            "<p><code class=\"language-math is-loading\">a</code></p>\n");
    /// options.extension.math_dollars = false;
    /// assert_eq!(markdown_to_html("$a$\n", &options),
    ///            "<p>$a$</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub math_dollars: bool,

    /// Recognize `\(...\)` inline and `\[...\]` blocks.
    ///
    /// ```rust
    /// # use mathspan::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("\\(a\\)\n", &options),
    ///            "<p><code class=\"language-math is-loading\">a</code></p>\n");
    /// options.extension.math_escapes = false;
    /// assert_eq!(markdown_to_html("\\(a\\)\n", &options),
    ///            "<p>\\(a\\)</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub math_escapes: bool,
}

impl Default for Extension {
    fn default() -> Self {
        Extension {
            math_dollars: true,
            math_escapes: true,
        }
    }
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for the scanners.
pub struct Parse {
    /// The punctuation allowed immediately around inline delimiters.
    ///
    /// ```rust
    /// # use mathspan::{markdown_to_html, BoundaryRules, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("[$c$]\n", &options),
    ///            "<p>[$c$]</p>\n");
    /// options.parse.boundary = BoundaryRules::new("([", ").]");
    /// assert_eq!(markdown_to_html("[$c$]\n", &options),
    ///            "<p>[<code class=\"language-math is-loading\">c</code>]</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub boundary: BoundaryRules,
}
