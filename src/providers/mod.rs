//! Provider catalog
//!
//! The fixed, ordered set of public URL-shortening services and the HTTP
//! API shape of each. Provider names map explicitly to endpoints; an
//! unknown name is a configuration error, never a runtime fallback.

use crate::core::error::{Result, UrlShortError};

/// How a provider's shortening API is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiShape {
    /// GET request with the long URL in a query parameter
    Get {
        endpoint: String,
        param: &'static str,
        /// Fixed query pairs the API requires besides the URL itself
        extra: &'static [(&'static str, &'static str)],
    },
    /// POST request with the long URL in a form field
    PostForm {
        endpoint: String,
        field: &'static str,
    },
}

/// A named external URL-shortening service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub name: &'static str,
    pub api: ApiShape,
}

impl Provider {
    /// The uppercased name used when pairing results for display
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// The built-in catalog: keyless free services, in the order they are tried.
pub fn catalog() -> Vec<Provider> {
    vec![
        Provider {
            name: "tinyurl",
            api: ApiShape::Get {
                endpoint: "https://tinyurl.com/api-create.php".to_string(),
                param: "url",
                extra: &[],
            },
        },
        Provider {
            name: "clckru",
            api: ApiShape::Get {
                endpoint: "https://clck.ru/--".to_string(),
                param: "url",
                extra: &[],
            },
        },
        Provider {
            name: "isgd",
            api: ApiShape::Get {
                endpoint: "https://is.gd/create.php".to_string(),
                param: "url",
                extra: &[("format", "simple")],
            },
        },
        Provider {
            name: "osdb",
            api: ApiShape::PostForm {
                endpoint: "https://osdb.link/".to_string(),
                field: "url",
            },
        },
        Provider {
            name: "chilpit",
            api: ApiShape::Get {
                endpoint: "http://chilp.it/api.php".to_string(),
                param: "url",
                extra: &[],
            },
        },
        Provider {
            name: "qpsru",
            api: ApiShape::Get {
                endpoint: "http://qps.ru/api".to_string(),
                param: "url",
                extra: &[],
            },
        },
        Provider {
            name: "dagd",
            api: ApiShape::Get {
                endpoint: "https://da.gd/shorten".to_string(),
                param: "url",
                extra: &[],
            },
        },
    ]
}

/// Resolve the provider list to try.
///
/// With no names given the full catalog is used. Given names select catalog
/// entries in the order the names appear; any name not in the catalog is
/// rejected with an error listing the valid names.
pub fn resolve_providers(names: Option<&[String]>) -> Result<Vec<Provider>> {
    let all = catalog();

    let Some(names) = names else {
        return Ok(all);
    };

    let mut resolved = Vec::with_capacity(names.len());
    for name in names {
        let wanted = name.trim().to_lowercase();
        match all.iter().find(|provider| provider.name == wanted) {
            Some(provider) => resolved.push(provider.clone()),
            None => {
                let valid = all
                    .iter()
                    .map(|provider| provider.name)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(UrlShortError::UnknownProvider(format!(
                    "'{wanted}' (valid providers: {valid})"
                )));
            }
        }
    }
    Ok(resolved)
}
