// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Build a `FieldChain` from `selector => extractor` pairs, tried in order.
///
/// ```ignore
/// let date = chain!("date";
///     "span.date-display-single" => text_compact,
///     "div.field--name-field-doc-date time" => text_compact,
/// )?;
/// ```
#[macro_export]
macro_rules! chain {
    ($name:expr; $($css:expr => $extract:expr),+ $(,)?) => {{
        let chain = $crate::core::chain::FieldChain::new($name);
        (|| -> $crate::error::Result<$crate::core::chain::FieldChain> {
            Ok(chain$(.then($css, $extract)?)+)
        })()
    }};
}
