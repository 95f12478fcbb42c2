use std::collections::HashMap;

/// Looks up `key` in the loaded translations, substituting `{name}` placeholders.
///
/// A missing key renders as the key itself.
#[macro_export]
macro_rules! tr {
    ($translations:expr, $key:expr) => {
        $crate::ui::utils::translation::tr_impl($translations, $key, &[])
    };
    ($translations:expr, $key:expr, $( $k:expr => $v:expr ),* ) => {
        $crate::ui::utils::translation::tr_impl($translations, $key, &[ $( ($k, $v) ),* ])
    };
}

pub fn tr_impl(
    translations: &HashMap<String, String>,
    key: &str,
    params: &[(&str, &str)],
) -> String {
    let template = translations.get(key).map_or(key, String::as_str);
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
