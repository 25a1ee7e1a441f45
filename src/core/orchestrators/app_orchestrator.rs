use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use futures::channel::mpsc;
use futures::Stream;
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Task};

use crate::core::interfaces::adapters::{ImageLoader, QueryResultsProvider};
use crate::core::models::{MuseumObject, ResultSet, UserSettings};
use crate::core::orchestrators::report_lookup;
use crate::global_constants::SEARCH_TERM_KEYWORD;
use crate::presentation::app_theme;
use crate::presentation::{
    FeatureMessage, FeatureView, PhotoCache, PreviewMessage, PreviewView, SearchLink,
};

pub struct AppOrchestrator {
    query_results_provider: Arc<dyn QueryResultsProvider>,
    image_loader: Arc<dyn ImageLoader>,
    settings: UserSettings,
    keyword: String,
    is_loading: bool,
    search_results: ResultSet,
    featured_result: Option<MuseumObject>,
    photo_cache: PhotoCache,
    pending_photos: HashSet<String>,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    KeywordChanged(String),
    SubmitSearch,
    Feature(FeatureMessage),
    Preview(PreviewMessage),
    LoadingChanged(bool),
    SearchResultsChanged(ResultSet),
    PhotoLoaded(String, Result<Vec<u8>, String>),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::KeywordChanged(keyword) => {
                write!(f, "KeywordChanged({})", keyword)
            }
            OrchestratorMessage::SubmitSearch => write!(f, "SubmitSearch"),
            OrchestratorMessage::Feature(message) => write!(f, "Feature({:?})", message),
            OrchestratorMessage::Preview(message) => write!(f, "Preview({:?})", message),
            OrchestratorMessage::LoadingChanged(is_loading) => {
                write!(f, "LoadingChanged({})", is_loading)
            }
            OrchestratorMessage::SearchResultsChanged(results) => {
                write!(f, "SearchResultsChanged({} records)", results.records.len())
            }
            OrchestratorMessage::PhotoLoaded(url, result) => {
                write!(f, "PhotoLoaded({}, {:?})", url, result.is_ok())
            }
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        query_results_provider: Arc<dyn QueryResultsProvider>,
        image_loader: Arc<dyn ImageLoader>,
        settings: UserSettings,
    ) -> Self {
        Self {
            query_results_provider,
            image_loader,
            settings,
            keyword: String::new(),
            is_loading: false,
            search_results: ResultSet::default(),
            featured_result: None,
            photo_cache: PhotoCache::new(),
            pending_photos: HashSet::new(),
        }
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::KeywordChanged(keyword) => {
                self.keyword = keyword;
                Task::none()
            }
            OrchestratorMessage::SubmitSearch => self.handle_submit_search(),
            OrchestratorMessage::Feature(FeatureMessage::SearchActivated(link)) => {
                self.handle_search_activated(link)
            }
            OrchestratorMessage::Preview(message) => self.handle_preview_message(message),
            OrchestratorMessage::LoadingChanged(is_loading) => {
                self.is_loading = is_loading;
                Task::none()
            }
            OrchestratorMessage::SearchResultsChanged(results) => {
                log::info!(
                    "[ORCHESTRATOR] Showing {} of {} records",
                    results.records.len(),
                    results.info.total_records
                );
                self.search_results = results;
                Task::none()
            }
            OrchestratorMessage::PhotoLoaded(url, result) => {
                self.handle_photo_loaded(url, result);
                Task::none()
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let keyword_input = text_input("Search the collection...", &self.keyword)
            .on_input(OrchestratorMessage::KeywordChanged)
            .on_submit(OrchestratorMessage::SubmitSearch)
            .padding(10)
            .size(16)
            .width(Length::Fill);

        let search_btn = button(text("Search"))
            .padding([10, 20])
            .style(app_theme::primary_button_style)
            .on_press(OrchestratorMessage::SubmitSearch);

        let search_bar = row![keyword_input, search_btn]
            .spacing(10)
            .align_y(Alignment::Center);

        let preview = PreviewView::render_ui(&self.search_results, self.is_loading)
            .map(OrchestratorMessage::Preview);

        let feature = FeatureView::build(self.featured_result.as_ref())
            .render_ui(&self.photo_cache)
            .map(OrchestratorMessage::Feature);

        let mut content = column![search_bar].spacing(16).padding(16);

        if self.is_loading {
            content = content.push(
                container(text("Searching...").size(16))
                    .padding(8)
                    .width(Length::Fill)
                    .style(app_theme::loading_banner_style),
            );
        }

        let body = row![preview, feature].spacing(16).height(Length::Fill);

        container(content.push(body))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn handle_submit_search(&mut self) -> Task<OrchestratorMessage> {
        let link = self.keyword_search_link();
        log::info!("[ORCHESTRATOR] Keyword search submitted: {:?}", link.search_value());

        self.handle_search_activated(link)
    }

    fn keyword_search_link(&self) -> SearchLink {
        SearchLink::new(SEARCH_TERM_KEYWORD, self.keyword.trim())
    }

    fn handle_search_activated(&mut self, link: SearchLink) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Search requested for {}", link.query());

        Task::stream(self.search_reports(link))
    }

    fn search_reports(&self, link: SearchLink) -> impl Stream<Item = OrchestratorMessage> {
        let provider = Arc::clone(&self.query_results_provider);

        lookup_report_stream(move |on_loading_change, on_results_change| async move {
            link.activate(provider.as_ref(), on_loading_change, on_results_change)
                .await;
        })
    }

    fn handle_preview_message(&mut self, message: PreviewMessage) -> Task<OrchestratorMessage> {
        match message {
            PreviewMessage::PreviousPage(url) | PreviewMessage::NextPage(url) => {
                self.handle_page_requested(url)
            }
            PreviewMessage::Select(index) => self.handle_select_record(index),
        }
    }

    fn handle_page_requested(&mut self, url: String) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Page requested");

        Task::stream(self.page_reports(url))
    }

    fn page_reports(&self, url: String) -> impl Stream<Item = OrchestratorMessage> {
        let provider = Arc::clone(&self.query_results_provider);

        lookup_report_stream(move |on_loading_change, on_results_change| async move {
            report_lookup(
                "results page",
                || provider.fetch_query_results_from_url(&url),
                on_loading_change,
                on_results_change,
            )
            .await;
        })
    }

    fn handle_select_record(&mut self, index: usize) -> Task<OrchestratorMessage> {
        let Some(record) = self.search_results.records.get(index) else {
            log::warn!("[ORCHESTRATOR] No record at index {}", index);
            return Task::none();
        };

        log::info!(
            "[ORCHESTRATOR] Featuring record {}: {}",
            index,
            PreviewView::record_heading(record)
        );
        self.featured_result = Some(record.clone());

        let urls = photo_urls(record);

        // Photos of the previously featured record are no longer shown.
        self.photo_cache.retain(|url, _| urls.contains(url));
        self.pending_photos.retain(|url| urls.contains(url));

        let mut tasks = Vec::new();
        for url in urls {
            if self.photo_cache.contains_key(&url) || !self.pending_photos.insert(url.clone()) {
                continue;
            }

            let image_loader = Arc::clone(&self.image_loader);
            tasks.push(Task::future(async move {
                let result = image_loader
                    .load_image(&url)
                    .await
                    .map_err(|e| e.to_string());
                OrchestratorMessage::PhotoLoaded(url, result)
            }));
        }

        Task::batch(tasks)
    }

    fn handle_photo_loaded(&mut self, url: String, result: Result<Vec<u8>, String>) {
        if !self.pending_photos.remove(&url) {
            log::debug!(
                "[ORCHESTRATOR] Dropping photo for a record no longer featured: {}",
                url
            );
            return;
        }

        match result {
            Ok(bytes) => {
                log::debug!("[ORCHESTRATOR] Photo ready: {}", url);
                self.photo_cache
                    .insert(url, iced::widget::image::Handle::from_bytes(bytes));
            }
            Err(e) => {
                log::warn!("[ORCHESTRATOR] Failed to load photo {}: {}", url, e);
            }
        }
    }
}

fn photo_urls(record: &MuseumObject) -> Vec<String> {
    record
        .images
        .iter()
        .flatten()
        .filter_map(|image| image.base_image_url.clone())
        .filter(|url| !url.is_empty())
        .collect()
}

/// Runs `lookup` with callbacks that forward into the update loop as
/// `LoadingChanged` and `SearchResultsChanged` messages.
fn lookup_report_stream<Lookup, Fut>(lookup: Lookup) -> impl Stream<Item = OrchestratorMessage>
where
    Lookup: FnOnce(Box<dyn FnMut(bool) + Send>, Box<dyn FnOnce(ResultSet) + Send>) -> Fut
        + Send
        + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    iced::stream::channel(
        4,
        move |output: mpsc::Sender<OrchestratorMessage>| async move {
            let mut loading_output = output.clone();
            let mut results_output = output;

            lookup(
                Box::new(move |is_loading| {
                    if let Err(e) =
                        loading_output.try_send(OrchestratorMessage::LoadingChanged(is_loading))
                    {
                        log::warn!(
                            "[ORCHESTRATOR] Dropped LoadingChanged({}) report: {}",
                            is_loading,
                            e
                        );
                    }
                }),
                Box::new(move |results| {
                    if let Err(e) =
                        results_output.try_send(OrchestratorMessage::SearchResultsChanged(results))
                    {
                        log::warn!("[ORCHESTRATOR] Dropped search results report: {}", e);
                    }
                }),
            )
            .await;
        },
    )
}
