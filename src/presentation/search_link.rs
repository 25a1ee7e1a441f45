use iced::widget::{button, container, text};
use iced::Element;

use crate::core::interfaces::adapters::QueryResultsProvider;
use crate::core::models::{ResultSet, SearchQuery};
use crate::core::orchestrators::report_lookup;
use crate::presentation::app_theme;
use crate::presentation::FeatureMessage;

/// A field value that runs a new search when pressed.
///
/// Holds only the query it is bound to. Loading and result state belong to
/// whoever activates it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLink {
    query: SearchQuery,
}

impl SearchLink {
    pub fn new(search_term: impl Into<String>, search_value: impl Into<String>) -> Self {
        Self {
            query: SearchQuery::new(search_term, search_value),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.query.term
    }

    pub fn search_value(&self) -> &str {
        &self.query.value
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn render_ui<'a>(self) -> Element<'a, FeatureMessage> {
        let label = text(self.query.value.clone()).size(16);

        let link = button(label)
            .padding(0)
            .style(app_theme::search_link_style)
            .on_press(FeatureMessage::SearchActivated(self));

        container(link).into()
    }

    pub async fn activate<Loading, Results>(
        &self,
        provider: &dyn QueryResultsProvider,
        on_loading_change: Loading,
        on_results_change: Results,
    ) where
        Loading: FnMut(bool),
        Results: FnOnce(ResultSet),
    {
        log::debug!("[SEARCH_LINK] Activated: {}", self.query);

        report_lookup(
            &self.query.to_string(),
            || provider.fetch_query_results(&self.query.term, &self.query.value),
            on_loading_change,
            on_results_change,
        )
        .await;
    }
}
