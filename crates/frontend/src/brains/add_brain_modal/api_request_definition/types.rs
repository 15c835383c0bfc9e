/// Tabs of the API request definition section. Closed set; the tab group
/// and the triggers both derive their values from `ALL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiTab {
    Params,
    Headers,
    SearchParams,
}

impl ApiTab {
    pub const ALL: [ApiTab; 3] = [ApiTab::Params, ApiTab::Headers, ApiTab::SearchParams];

    /// Stable identifier used as the tab-group value.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiTab::Params => "params",
            ApiTab::Headers => "headers",
            ApiTab::SearchParams => "search-params",
        }
    }

    pub fn from_value(value: &str) -> Option<ApiTab> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == value)
    }

    /// Localized tab header text.
    pub fn label(self) -> String {
        match self {
            ApiTab::Params => t!("brain.api.tab_params").to_string(),
            ApiTab::Headers => t!("brain.api.tab_headers").to_string(),
            ApiTab::SearchParams => t!("brain.api.tab_search_params").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for tab in ApiTab::ALL {
            assert_eq!(ApiTab::from_value(tab.as_str()), Some(tab));
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert_eq!(ApiTab::from_value("body"), None);
        assert_eq!(ApiTab::from_value(""), None);
    }

    #[test]
    fn test_values_are_distinct() {
        let values: Vec<&str> = ApiTab::ALL.iter().map(|tab| tab.as_str()).collect();
        let mut deduped = values.clone();
        deduped.dedup();
        assert_eq!(values, deduped);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_labels_resolve() {
        rust_i18n::set_locale("en");
        assert_eq!(ApiTab::Params.label(), "Params");
        assert_eq!(ApiTab::Headers.label(), "Headers");
        assert_eq!(ApiTab::SearchParams.label(), "Search params");
    }
}
