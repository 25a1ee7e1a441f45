use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use crate::core::models::{non_empty, MuseumObject, ResultSet};
use crate::global_constants::MISSING_INFO_TITLE;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum PreviewMessage {
    PreviousPage(String),
    NextPage(String),
    Select(usize),
}

pub struct PreviewView;

impl PreviewView {
    pub fn record_heading(record: &MuseumObject) -> &str {
        non_empty(&record.title).unwrap_or(MISSING_INFO_TITLE)
    }

    /// Pagination links, withheld while a lookup is in flight.
    pub fn page_links(results: &ResultSet, is_loading: bool) -> (Option<&str>, Option<&str>) {
        if is_loading {
            return (None, None);
        }
        (
            non_empty(&results.info.prev),
            non_empty(&results.info.next),
        )
    }

    pub fn render_ui<'a>(
        results: &'a ResultSet,
        is_loading: bool,
    ) -> Element<'a, PreviewMessage> {
        let (previous_link, next_link) = Self::page_links(results, is_loading);

        let previous_btn = button(text("Previous"))
            .padding([8, 16])
            .style(app_theme::primary_button_style)
            .on_press_maybe(
                previous_link.map(|url| PreviewMessage::PreviousPage(url.to_string())),
            );

        let next_btn = button(text("Next"))
            .padding([8, 16])
            .style(app_theme::primary_button_style)
            .on_press_maybe(next_link.map(|url| PreviewMessage::NextPage(url.to_string())));

        let summary = text(format!(
            "{} records, page {} of {}",
            results.info.total_records, results.info.page, results.info.pages
        ))
        .size(14)
        .style(app_theme::fact_title_style);

        let pagination = row![previous_btn, next_btn]
            .spacing(10)
            .align_y(Alignment::Center);

        let entries = Column::with_children(results.records.iter().enumerate().map(
            |(index, record)| -> Element<'a, PreviewMessage> {
                button(text(Self::record_heading(record)).size(16))
                    .width(Length::Fill)
                    .padding(10)
                    .style(app_theme::preview_entry_style)
                    .on_press(PreviewMessage::Select(index))
                    .into()
            },
        ))
        .spacing(8)
        .width(Length::Fill);

        let content = column![pagination, summary, scrollable(entries).height(Length::Fill)]
            .spacing(12)
            .padding(12)
            .width(Length::Fill);

        container(content)
            .width(Length::Fixed(320.0))
            .height(Length::Fill)
            .into()
    }
}
