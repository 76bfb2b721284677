/// Replaces every `%name%` placeholder in one pass, so substituted text is
/// never scanned again. Unknown names and stray `%` are left untouched.
pub(super) fn fill<F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let replaced = after.find('%').and_then(|end| {
            let name = &after[..end];
            let is_name = !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric());
            if !is_name {
                return None;
            }
            lookup(name).map(|value| (value, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
