use crate::state::Sites;

/// Links to the three sites, carrying over the request's valid parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavUrls {
    pub v4: String,
    pub v6: String,
    pub dual_stack: String,
}

impl NavUrls {
    pub fn build(sites: &Sites, params: &[(&str, &str)]) -> Self {
        Self {
            v4: with_query_params(sites.v4.as_str(), params),
            v6: with_query_params(sites.v6.as_str(), params),
            dual_stack: with_query_params(sites.dual_stack.as_str(), params),
        }
    }
}

/// Sets each parameter on `url`, replacing the first existing pair of the
/// same name in place and dropping any later duplicates.
///
/// Values are expected to be already URL-safe.
pub fn with_query_params(url: &str, params: &[(&str, &str)]) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = match without_fragment.split_once('?') {
        Some((base, query)) => (base, query),
        None => (without_fragment, ""),
    };

    let mut base = base.to_string();
    if let Some(scheme_end) = base.find("://") {
        if !base[scheme_end + 3..].contains('/') {
            base.push('/');
        }
    }

    let mut pairs: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect();

    for (name, value) in params {
        match pairs.iter().position(|(existing, _)| existing == name) {
            Some(index) => {
                pairs[index].1 = value.to_string();
                let mut seen = false;
                pairs.retain(|(existing, _)| {
                    if existing != name {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => pairs.push((name.to_string(), value.to_string())),
        }
    }

    let mut out = base;
    if !pairs.is_empty() {
        out.push('?');
        let query: Vec<String> = pairs
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        out.push_str(&query.join("&"));
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
