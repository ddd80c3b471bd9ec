use dioxus::prelude::*;
use patterns_core::model::Difficulty;
use services::ProgressSnapshot;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    SortDir, SortKey, TableQuery, active_dir, apply_query, distinct_companies, distinct_patterns,
    map_question_rows, sort_rows,
};

#[derive(Clone, Debug, PartialEq)]
struct TableData {
    snapshot: ProgressSnapshot,
    show_patterns: bool,
}

#[component]
pub fn QuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let dataset = ctx.dataset();
    let progress = ctx.progress();
    let visibility = ctx.visibility();
    let analytics = ctx.analytics();

    let mut search = use_signal(String::new);
    let mut difficulty_filter = use_signal(|| None::<Difficulty>);
    let mut pattern_filter = use_signal(|| None::<String>);
    let mut company_filter = use_signal(|| None::<String>);
    let mut sort = use_signal(|| None::<(SortKey, SortDir)>);

    let progress_for_resource = progress.clone();
    let visibility_for_resource = visibility.clone();
    let resource = use_resource(move || {
        let progress = progress_for_resource.clone();
        let visibility = visibility_for_resource.clone();
        async move {
            // Absent or unreadable visibility falls back to the default;
            // completion flags were reconciled at startup.
            let show_patterns = visibility.get().await.unwrap_or(true);
            let snapshot = progress.snapshot().map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(TableData {
                snapshot,
                show_patterns,
            })
        }
    });

    let state = view_state_from_resource(&resource);

    let pattern_options = distinct_patterns(
        dataset
            .iter()
            .flat_map(|question| question.patterns().iter().cloned()),
    );
    let company_options = distinct_companies(
        dataset
            .iter()
            .flat_map(|question| question.companies().iter().cloned()),
    );

    rsx! {
        div { class: "page questions-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => {
                    let tally = data.snapshot.tally;
                    let query = TableQuery {
                        search: search(),
                        difficulty: difficulty_filter(),
                        pattern: pattern_filter(),
                        company: company_filter(),
                    };
                    let rows = map_question_rows(
                        dataset.iter(),
                        &data.snapshot.checked,
                        data.show_patterns,
                    );
                    let mut visible_rows = apply_query(&rows, &query);
                    if let Some((key, dir)) = sort() {
                        sort_rows(&mut visible_rows, key, dir);
                    }

                    let show_patterns = data.show_patterns;
                    let name_marker = sort_marker(active_dir(sort(), SortKey::Name));
                    let difficulty_marker = sort_marker(active_dir(sort(), SortKey::Difficulty));
                    let easy_done = tally.get(Difficulty::Easy);
                    let medium_done = tally.get(Difficulty::Medium);
                    let hard_done = tally.get(Difficulty::Hard);

                    let row_items = visible_rows.iter().map(|row| {
                        let id = row.id;
                        let name = row.name.clone();
                        let url = row.url.clone();
                        let analytics_label = format!("{name} url");
                        let difficulty_class =
                            format!("badge {}", row.difficulty.label().to_lowercase());
                        let difficulty_label = row.difficulty.label();
                        let pattern_labels = row.pattern_labels.clone();
                        let companies = row.companies.clone();
                        let done = row.done;
                        let premium = row.premium;
                        let progress = progress.clone();
                        let analytics = analytics.clone();
                        rsx! {
                            tr { class: if done { "row-done" } else { "" },
                                td { class: "cell-check",
                                    input {
                                        r#type: "checkbox",
                                        checked: done,
                                        onchange: move |_| {
                                            let progress = progress.clone();
                                            let mut resource = resource;
                                            spawn(async move {
                                                // Persistence failures are not surfaced; the
                                                // restart re-renders whatever state held.
                                                let _ = progress.toggle(id).await;
                                                resource.restart();
                                            });
                                        },
                                    }
                                }
                                td { class: "cell-premium",
                                    if premium {
                                        span { title: "Requires a premium subscription to view", "\u{1F512}" }
                                    }
                                }
                                td { class: "cell-name", "{name}" }
                                td { class: "cell-url",
                                    a {
                                        href: "{url}",
                                        target: "_blank",
                                        onclick: move |_| {
                                            let analytics = analytics.clone();
                                            let label = analytics_label.clone();
                                            spawn(async move {
                                                analytics.event("Table", "Clicked url", &label).await;
                                            });
                                        },
                                        "{url}"
                                    }
                                }
                                td { class: "cell-patterns",
                                    for label in pattern_labels {
                                        span { class: "pill pattern-pill", "{label}" }
                                    }
                                }
                                td { class: "cell-difficulty",
                                    span { class: "{difficulty_class}", "{difficulty_label}" }
                                }
                                td { class: "cell-companies",
                                    for company in companies {
                                        span { class: "pill company-pill", title: "{company}", "{company}" }
                                    }
                                }
                            }
                        }
                    });

                    rsx! {
                        header { class: "view-header",
                            h2 { class: "view-title", "Questions" }
                            p { class: "view-subtitle",
                                "Done: Easy {easy_done} / Medium {medium_done} / Hard {hard_done}"
                            }
                        }

                        div { class: "table-controls",
                            input {
                                class: "search-input",
                                r#type: "text",
                                placeholder: "Search questions...",
                                value: "{search()}",
                                oninput: move |evt| search.set(evt.value()),
                            }
                            select {
                                class: "filter-select",
                                onchange: move |evt| {
                                    difficulty_filter.set(evt.value().parse::<Difficulty>().ok());
                                },
                                option { value: "", "All difficulties" }
                                for difficulty in Difficulty::ALL {
                                    option { value: "{difficulty.label()}", "{difficulty.label()}" }
                                }
                            }
                            select {
                                class: "filter-select",
                                onchange: move |evt| {
                                    let value = evt.value();
                                    pattern_filter.set(if value.is_empty() { None } else { Some(value) });
                                },
                                option { value: "", "All patterns" }
                                for pattern in pattern_options.clone() {
                                    option { value: "{pattern}", "{pattern}" }
                                }
                            }
                            select {
                                class: "filter-select",
                                onchange: move |evt| {
                                    let value = evt.value();
                                    company_filter.set(if value.is_empty() { None } else { Some(value) });
                                },
                                option { value: "", "All companies" }
                                for company in company_options.clone() {
                                    option { value: "{company}", "{company}" }
                                }
                            }
                            label { class: "pattern-toggle",
                                span { "Show/Hide Patterns " }
                                input {
                                    r#type: "checkbox",
                                    checked: show_patterns,
                                    onchange: move |_| {
                                        let visibility = visibility.clone();
                                        let mut resource = resource;
                                        spawn(async move {
                                            let _ = visibility.set(!show_patterns).await;
                                            resource.restart();
                                        });
                                    },
                                }
                            }
                        }

                        table { class: "questions-table",
                            thead {
                                tr {
                                    th {}
                                    th {}
                                    th {
                                        button {
                                            class: "sort-header",
                                            r#type: "button",
                                            onclick: move |_| {
                                                sort.set(Some(next_sort(sort(), SortKey::Name)));
                                            },
                                            "Name {name_marker}"
                                        }
                                    }
                                    th { "URL" }
                                    th { "Pattern" }
                                    th {
                                        button {
                                            class: "sort-header",
                                            r#type: "button",
                                            onclick: move |_| {
                                                sort.set(Some(next_sort(sort(), SortKey::Difficulty)));
                                            },
                                            "Difficulty {difficulty_marker}"
                                        }
                                    }
                                    th { "Companies" }
                                }
                            }
                            tbody {
                                {row_items}
                            }
                        }
                        if visible_rows.is_empty() {
                            p { class: "table-empty", "No questions match the current filters." }
                        }
                    }
                }
            }
        }
    }
}

/// Clicking a column sorts ascending, clicking it again flips direction.
fn next_sort(current: Option<(SortKey, SortDir)>, key: SortKey) -> (SortKey, SortDir) {
    match current {
        Some((active, dir)) if active == key => (key, dir.flipped()),
        _ => (key, SortDir::Asc),
    }
}

fn sort_marker(dir: Option<SortDir>) -> &'static str {
    match dir {
        Some(SortDir::Asc) => "\u{25B2}",
        Some(SortDir::Desc) => "\u{25BC}",
        None => "",
    }
}
