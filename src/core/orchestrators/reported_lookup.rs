use std::future::Future;

use crate::core::models::ResultSet;

/// Runs one lookup and reports its lifecycle through the given callbacks.
///
/// `on_loading_change(true)` fires before `start_lookup` is called and
/// `on_loading_change(false)` fires once the lookup has settled, whatever the
/// outcome. A failed lookup is logged and `on_results_change` is not called.
pub async fn report_lookup<Start, Fut, Loading, Results>(
    description: &str,
    start_lookup: Start,
    mut on_loading_change: Loading,
    on_results_change: Results,
) where
    Start: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<ResultSet>>,
    Loading: FnMut(bool),
    Results: FnOnce(ResultSet),
{
    log::info!("[LOOKUP] Starting lookup: {}", description);
    on_loading_change(true);

    match start_lookup().await {
        Ok(results) => {
            log::info!(
                "[LOOKUP] Lookup {} returned {} records",
                description,
                results.records.len()
            );
            on_results_change(results);
        }
        Err(e) => {
            log::error!("[LOOKUP] Lookup {} failed: {:#}", description, e);
        }
    }

    on_loading_change(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::core::models::MuseumObject;

    fn recorder() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn sample_results() -> ResultSet {
        ResultSet {
            records: vec![MuseumObject {
                title: Some("Tea Bowl".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_successful_lookup_reports_in_order() {
        let events = recorder();
        let lookup_events = Arc::clone(&events);
        let loading_events = Arc::clone(&events);
        let results_events = Arc::clone(&events);

        report_lookup(
            "culture=Japanese",
            move || async move {
                lookup_events.lock().unwrap().push("lookup".to_string());
                Ok(sample_results())
            },
            move |is_loading| {
                loading_events
                    .lock()
                    .unwrap()
                    .push(format!("loading:{}", is_loading))
            },
            move |results| {
                results_events
                    .lock()
                    .unwrap()
                    .push(format!("results:{}", results.records.len()))
            },
        )
        .await;

        assert_eq!(
            *events.lock().unwrap(),
            vec!["loading:true", "lookup", "results:1", "loading:false"]
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_skips_results_and_still_resets_loading() {
        let events = recorder();
        let loading_events = Arc::clone(&events);
        let results_events = Arc::clone(&events);

        report_lookup(
            "medium=bronze",
            || async { Err(anyhow::anyhow!("connection refused")) },
            move |is_loading| {
                loading_events
                    .lock()
                    .unwrap()
                    .push(format!("loading:{}", is_loading))
            },
            move |_results| results_events.lock().unwrap().push("results".to_string()),
        )
        .await;

        assert_eq!(*events.lock().unwrap(), vec!["loading:true", "loading:false"]);
    }

    #[tokio::test]
    async fn test_loading_is_raised_before_lookup_is_started() {
        let loading_seen_at_start = Arc::new(Mutex::new(None));
        let is_loading = Arc::new(Mutex::new(false));
        let state_at_start = Arc::clone(&is_loading);
        let loading_state = Arc::clone(&is_loading);
        let seen_at_start = Arc::clone(&loading_seen_at_start);

        report_lookup(
            "person=Hokusai",
            move || {
                *seen_at_start.lock().unwrap() = Some(*state_at_start.lock().unwrap());
                async { Ok(ResultSet::default()) }
            },
            move |loading| *loading_state.lock().unwrap() = loading,
            |_results| {},
        )
        .await;

        assert_eq!(*loading_seen_at_start.lock().unwrap(), Some(true));
        assert!(!*is_loading.lock().unwrap());
    }
}
