use std::collections::HashMap;

use iced::widget::{column, container, image, keyed_column, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::core::models::{non_empty, MuseumObject};
use crate::global_constants::{
    SEARCH_TERM_CULTURE, SEARCH_TERM_MEDIUM, SEARCH_TERM_PERSON, SEARCH_TERM_TECHNIQUE,
};
use crate::presentation::app_theme;
use crate::presentation::SearchLink;

/// Downloaded photos keyed by their source URL.
pub type PhotoCache = HashMap<String, image::Handle>;

#[derive(Debug, Clone)]
pub enum FeatureMessage {
    SearchActivated(SearchLink),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FactContent {
    Text(String),
    Searchable(Vec<SearchLink>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactRow {
    pub label: &'static str,
    pub content: FactContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoReference {
    /// Widget key in the photo column.
    pub image_id: Option<u64>,
    pub url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSheet {
    pub title: String,
    pub dated: String,
    pub facts: Vec<FactRow>,
    pub photos: Vec<PhotoReference>,
}

/// Fact sheet for the featured object.
///
/// Built fresh from the object on every render and never kept between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureView {
    sheet: Option<FeatureSheet>,
}

impl FeatureView {
    pub fn build(featured_result: Option<&MuseumObject>) -> Self {
        Self {
            sheet: featured_result.map(build_sheet),
        }
    }

    pub fn sheet(&self) -> Option<&FeatureSheet> {
        self.sheet.as_ref()
    }

    pub fn render_ui<'a>(self, photo_cache: &PhotoCache) -> Element<'a, FeatureMessage> {
        let Some(sheet) = self.sheet else {
            return container(Column::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        };

        let header = column![text(sheet.title).size(28), text(sheet.dated).size(18)].spacing(4);

        let facts = Column::with_children(sheet.facts.into_iter().map(render_fact_row))
            .spacing(12)
            .width(Length::Fill);

        let photos = keyed_column(
            sheet
                .photos
                .into_iter()
                .map(|photo| (photo.image_id, render_photo(photo, photo_cache))),
        )
        .spacing(16)
        .width(Length::Fill);

        let content = column![header, facts, photos]
            .spacing(24)
            .padding(20)
            .width(Length::Fill);

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn build_sheet(object: &MuseumObject) -> FeatureSheet {
    let mut facts = Vec::new();

    push_text(&mut facts, "Description", &object.description);
    push_searchable(&mut facts, "Culture", SEARCH_TERM_CULTURE, &object.culture);
    push_text(&mut facts, "Style", &object.style);
    push_searchable(&mut facts, "Technique", SEARCH_TERM_TECHNIQUE, &object.technique);
    if let Some(medium) = non_empty(&object.medium) {
        facts.push(FactRow {
            label: "Medium",
            content: FactContent::Searchable(vec![SearchLink::new(
                SEARCH_TERM_MEDIUM,
                medium.to_lowercase(),
            )]),
        });
    }
    push_text(&mut facts, "Dimensions", &object.dimensions);
    if let Some(people) = object.people.as_ref().filter(|people| !people.is_empty()) {
        let links = people
            .iter()
            .map(|person| {
                SearchLink::new(
                    SEARCH_TERM_PERSON,
                    person.display_name.clone().unwrap_or_default(),
                )
            })
            .collect();
        facts.push(FactRow {
            label: "People",
            content: FactContent::Searchable(links),
        });
    }
    push_text(&mut facts, "Department", &object.department);
    push_text(&mut facts, "Division", &object.division);
    push_text(&mut facts, "Contact", &object.contact);
    push_text(&mut facts, "Creditline", &object.creditline);

    let photos = object
        .images
        .iter()
        .flatten()
        .map(|image| PhotoReference {
            image_id: image.image_id,
            url: image.base_image_url.clone().unwrap_or_default(),
            alt_text: image.alt_text.clone().unwrap_or_default(),
        })
        .collect();

    FeatureSheet {
        title: object.title.clone().unwrap_or_default(),
        dated: object.dated.clone().unwrap_or_default(),
        facts,
        photos,
    }
}

fn push_text(facts: &mut Vec<FactRow>, label: &'static str, value: &Option<String>) {
    if let Some(value) = non_empty(value) {
        facts.push(FactRow {
            label,
            content: FactContent::Text(value.to_string()),
        });
    }
}

fn push_searchable(
    facts: &mut Vec<FactRow>,
    label: &'static str,
    search_term: &str,
    value: &Option<String>,
) {
    if let Some(value) = non_empty(value) {
        facts.push(FactRow {
            label,
            content: FactContent::Searchable(vec![SearchLink::new(search_term, value)]),
        });
    }
}

fn render_fact_row<'a>(fact: FactRow) -> Element<'a, FeatureMessage> {
    let label = text(fact.label)
        .size(16)
        .width(Length::Fixed(140.0))
        .style(app_theme::fact_title_style);

    let content: Element<'a, FeatureMessage> = match fact.content {
        FactContent::Text(value) => text(value).size(16).width(Length::Fill).into(),
        FactContent::Searchable(links) => {
            Column::with_children(links.into_iter().map(|link| link.render_ui()))
                .spacing(4)
                .width(Length::Fill)
                .into()
        }
    };

    row![label, content].spacing(12).into()
}

fn render_photo<'a>(
    photo: PhotoReference,
    photo_cache: &PhotoCache,
) -> Element<'a, FeatureMessage> {
    match photo_cache.get(&photo.url) {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        None => container(text(photo.alt_text).size(14).style(app_theme::fact_title_style))
            .padding(12)
            .width(Length::Fill)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ObjectImage, ObjectPerson};

    fn labels(view: &FeatureView) -> Vec<&'static str> {
        view.sheet()
            .unwrap()
            .facts
            .iter()
            .map(|fact| fact.label)
            .collect()
    }

    fn fact<'a>(view: &'a FeatureView, label: &str) -> Option<&'a FactContent> {
        view.sheet()
            .unwrap()
            .facts
            .iter()
            .find(|fact| fact.label == label)
            .map(|fact| &fact.content)
    }

    fn person(id: u64, name: &str) -> ObjectPerson {
        ObjectPerson {
            person_id: Some(id),
            display_name: Some(name.to_string()),
        }
    }

    fn fully_described_object() -> MuseumObject {
        MuseumObject {
            title: Some("The Great Wave".to_string()),
            dated: Some("c. 1830".to_string()),
            description: Some("Woodblock print".to_string()),
            culture: Some("Japanese".to_string()),
            style: Some("Ukiyo-e".to_string()),
            technique: Some("Woodblock".to_string()),
            medium: Some("Ink and Color on Paper".to_string()),
            dimensions: Some("25.7 x 37.9 cm".to_string()),
            people: Some(vec![person(1, "Katsushika Hokusai")]),
            department: Some("Asian Art".to_string()),
            division: Some("Asian and Mediterranean Art".to_string()),
            contact: Some("am_asian@harvard.edu".to_string()),
            creditline: Some("Gift of a friend".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_result_builds_empty_view() {
        let view = FeatureView::build(None);

        assert!(view.sheet().is_none());
    }

    #[test]
    fn test_rows_follow_fixed_order() {
        let object = fully_described_object();

        let view = FeatureView::build(Some(&object));

        assert_eq!(
            labels(&view),
            vec![
                "Description",
                "Culture",
                "Style",
                "Technique",
                "Medium",
                "Dimensions",
                "People",
                "Department",
                "Division",
                "Contact",
                "Creditline",
            ]
        );
    }

    #[test]
    fn test_empty_and_missing_fields_omit_rows() {
        let object = MuseumObject {
            title: Some("Untitled".to_string()),
            description: Some(String::new()),
            style: None,
            people: Some(Vec::new()),
            creditline: Some("Bequest".to_string()),
            ..Default::default()
        };

        let view = FeatureView::build(Some(&object));

        assert_eq!(labels(&view), vec!["Creditline"]);
    }

    #[test]
    fn test_description_is_static_text() {
        let object = MuseumObject {
            description: Some("Oil painting".to_string()),
            ..Default::default()
        };

        let view = FeatureView::build(Some(&object));

        assert_eq!(
            fact(&view, "Description"),
            Some(&FactContent::Text("Oil painting".to_string()))
        );
    }

    #[test]
    fn test_culture_and_technique_are_searchable_unchanged() {
        let object = fully_described_object();

        let view = FeatureView::build(Some(&object));

        assert_eq!(
            fact(&view, "Culture"),
            Some(&FactContent::Searchable(vec![SearchLink::new(
                "culture", "Japanese"
            )]))
        );
        assert_eq!(
            fact(&view, "Technique"),
            Some(&FactContent::Searchable(vec![SearchLink::new(
                "technique",
                "Woodblock"
            )]))
        );
    }

    #[test]
    fn test_medium_search_value_is_lowercased() {
        let object = MuseumObject {
            medium: Some("Oil on Canvas".to_string()),
            ..Default::default()
        };

        let view = FeatureView::build(Some(&object));

        match fact(&view, "Medium") {
            Some(FactContent::Searchable(links)) => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].search_term(), "medium");
                assert_eq!(links[0].search_value(), "oil on canvas");
            }
            other => panic!("Expected searchable medium row, got {:?}", other),
        }
    }

    #[test]
    fn test_people_produce_one_link_each_in_order() {
        let object = MuseumObject {
            people: Some(vec![
                person(3, "Utagawa Hiroshige"),
                person(1, "Katsushika Hokusai"),
                person(2, "Kitagawa Utamaro"),
            ]),
            ..Default::default()
        };

        let view = FeatureView::build(Some(&object));

        match fact(&view, "People") {
            Some(FactContent::Searchable(links)) => {
                let names: Vec<&str> = links.iter().map(|link| link.search_value()).collect();
                assert_eq!(
                    names,
                    vec!["Utagawa Hiroshige", "Katsushika Hokusai", "Kitagawa Utamaro"]
                );
                assert!(links.iter().all(|link| link.search_term() == "person"));
            }
            other => panic!("Expected searchable people row, got {:?}", other),
        }
    }

    #[test]
    fn test_static_fields_are_not_searchable() {
        let object = fully_described_object();

        let view = FeatureView::build(Some(&object));

        for label in ["Style", "Dimensions", "Department", "Division", "Contact"] {
            assert!(
                matches!(fact(&view, label), Some(FactContent::Text(_))),
                "{} should be static text",
                label
            );
        }
    }

    #[test]
    fn test_photos_preserve_order_url_and_alt_text() {
        let object = MuseumObject {
            images: Some(vec![
                ObjectImage {
                    image_id: Some(1),
                    base_image_url: Some("u1".to_string()),
                    alt_text: Some("a1".to_string()),
                },
                ObjectImage {
                    image_id: Some(2),
                    base_image_url: Some("u2".to_string()),
                    alt_text: Some("a2".to_string()),
                },
            ]),
            ..Default::default()
        };

        let view = FeatureView::build(Some(&object));

        assert_eq!(
            view.sheet().unwrap().photos,
            vec![
                PhotoReference {
                    image_id: Some(1),
                    url: "u1".to_string(),
                    alt_text: "a1".to_string(),
                },
                PhotoReference {
                    image_id: Some(2),
                    url: "u2".to_string(),
                    alt_text: "a2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_images_leave_photo_section_empty() {
        let object = MuseumObject {
            title: Some("Sherd".to_string()),
            ..Default::default()
        };

        let view = FeatureView::build(Some(&object));

        assert!(view.sheet().unwrap().photos.is_empty());
    }

    #[test]
    fn test_header_uses_title_and_date() {
        let object = fully_described_object();

        let view = FeatureView::build(Some(&object));
        let sheet = view.sheet().unwrap();

        assert_eq!(sheet.title, "The Great Wave");
        assert_eq!(sheet.dated, "c. 1830");
    }

    #[test]
    fn test_build_does_not_modify_result() {
        let object = fully_described_object();
        let snapshot = object.clone();

        let _view = FeatureView::build(Some(&object));

        assert_eq!(object, snapshot);
    }
}
