// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Click-to-navigation behaviour of search result rows, driven through the
//! public API with recording collaborators.

use std::{cell::RefCell, rc::Rc};

use serde_json::{Value, json};

use resultrow::{
    ViewError,
    analytics::{AnalyticsEvent, AnalyticsSink},
    components::{ClickOutcome, ResultItemView, ResultList, TEMPLATE_KEY, ViewBindings},
    event::ClickEvent,
    model::{ResultCollection, ResultRecord},
    navigation::Navigator,
    template::DocumentTemplates,
};

const DOCUMENT: &str = r#"
<html>
  <body>
    <ol class="search-results"></ol>
    <script type="text/template" id="search_item-tpl">
      <div class="result-title"><a href="<%= url %>"><%- title %></a></div>
      <div class="result-excerpt"><%= excerpt %></div>
      <a class="result-location" href="<%= location %>">location</a>
    </script>
  </body>
</html>
"#;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Emit(AnalyticsEvent),
    Navigate(String),
}

#[derive(Default)]
struct Calls(RefCell<Vec<Call>>);

struct RecordingSink(Rc<Calls>);
struct RecordingNavigator(Rc<Calls>);

impl AnalyticsSink for RecordingSink {
    fn emit(&self, event: &AnalyticsEvent) {
        self.0.0.borrow_mut().push(Call::Emit(event.clone()));
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.0.0.borrow_mut().push(Call::Navigate(url.to_string()));
    }
}

fn bindings(calls: &Rc<Calls>) -> ViewBindings {
    ViewBindings::new(
        Rc::new(RecordingSink(Rc::clone(calls))),
        Rc::new(RecordingNavigator(Rc::clone(calls))),
    )
}

fn record(id: &str, url: &str) -> ResultRecord {
    ResultRecord::new(id)
        .with_attribute("url", url)
        .with_attribute("title", format!("Result {id}"))
        .with_attribute("excerpt", "about <em>engines</em>")
        .with_attribute("location", format!("/location/{id}"))
}

fn payload(event: &AnalyticsEvent) -> Value {
    Value::Object(event.data.clone())
}

fn navigations(calls: &Calls) -> Vec<String> {
    calls
        .0
        .borrow()
        .iter()
        .filter_map(|c| match c {
            Call::Navigate(url) => Some(url.clone()),
            Call::Emit(_) => None,
        })
        .collect()
}

fn emitted(calls: &Calls) -> Vec<AnalyticsEvent> {
    calls
        .0
        .borrow()
        .iter()
        .filter_map(|c| match c {
            Call::Emit(event) => Some(event.clone()),
            Call::Navigate(_) => None,
        })
        .collect()
}

#[test]
fn engines_scenario_end_to_end() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.push(record("r-a", "/course/r-a"));
    collection.push(record("r-b", "/course/r-b"));
    collection.push(record("r1", "/course/r1"));

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();

    let (event, outcome) = list.click("r1", 0).unwrap();

    assert!(event.default_prevented());
    assert_eq!(outcome, ClickOutcome::Navigated("/course/r1".into()));

    let calls = calls.0.borrow();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
        Call::Emit(event) => {
            assert_eq!(event.name, "search.result_selected");
            assert_eq!(
                payload(event),
                json!({
                    "search_term": "engines",
                    "result_position": 2,
                    "result_link": "r1",
                })
            );
        }
        other => panic!("expected emission first, got {other:?}"),
    }
    assert_eq!(calls[1], Call::Navigate("/course/r1".into()));
}

#[test]
fn position_spans_pages() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("rust", 2, 10);
    for id in ["a", "b", "c", "d"] {
        collection.push(record(id, &format!("/course/{id}")));
    }

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();
    list.click("d", 0).unwrap();

    assert_eq!(payload(&emitted(&calls)[0])["result_position"], json!(23));
}

#[test]
fn result_link_is_the_id_not_the_href() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("docs", 0, 10);
    collection.push(record("doc-42", "/view/doc-42?utm=1"));

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();
    list.click("doc-42", 0).unwrap();

    assert_eq!(payload(&emitted(&calls)[0])["result_link"], json!("doc-42"));
    assert_eq!(navigations(&calls), vec!["/view/doc-42?utm=1"]);
}

#[test]
fn search_term_is_read_at_click_time() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.push(record("r1", "/course/r1"));

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();

    list.collection_mut().set_search_term("motors");
    list.collection_mut().set_page(3);
    list.click("r1", 0).unwrap();

    let data = payload(&emitted(&calls)[0]);
    assert_eq!(data["search_term"], json!("motors"));
    assert_eq!(data["result_position"], json!(15));
}

#[test]
fn removed_record_reports_sentinel_position() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("engines", 1, 5);
    collection.push(record("r0", "/course/r0"));
    collection.push(record("r1", "/course/r1"));

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();

    list.collection_mut().remove("r1");
    let (_, outcome) = list.click("r1", 0).unwrap();

    // page * page_size + (-1)
    assert_eq!(payload(&emitted(&calls)[0])["result_position"], json!(4));
    assert_eq!(outcome, ClickOutcome::Navigated("/course/r1".into()));
}

#[test]
fn every_anchor_in_a_row_is_handled_on_its_own() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.push(record("r1", "/course/r1"));

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();

    list.click("r1", 1).unwrap();
    list.click("r1", 0).unwrap();

    assert_eq!(navigations(&calls), vec!["/location/r1", "/course/r1"]);
    assert_eq!(emitted(&calls).len(), 2);
}

#[test]
fn each_click_navigates_exactly_once() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);
    let record = Rc::new(record("r1", "/course/r1"));

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.set_records(vec![Rc::clone(&record)]);

    let mut view = ResultItemView::new(record, &templates, bindings(&calls)).unwrap();
    view.render();

    let mut event = ClickEvent::new(view.element().anchor(0).unwrap());
    view.handle_click(&mut event, &collection);

    assert!(event.default_prevented());
    assert_eq!(navigations(&calls), vec!["/course/r1"]);
    assert_eq!(emitted(&calls).len(), 1);
}

#[test]
fn clicks_for_unknown_rows_are_ignored() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.push(record("r1", "/course/r1"));

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();

    let anchor = list.row("r1").unwrap().element().anchor(0).unwrap();
    let mut event = ClickEvent::new(anchor);

    assert_eq!(list.dispatch_click("nope", &mut event), ClickOutcome::Ignored);
    assert!(!event.default_prevented());
    assert!(calls.0.borrow().is_empty());
    assert!(list.click("r1", 9).is_none());
}

#[test]
fn missing_row_template_fails_list_construction() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html("<html><body></body></html>");

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.push(record("r1", "/course/r1"));

    let err = ResultList::new(collection, &templates, bindings(&calls)).err().unwrap();

    assert!(matches!(err, ViewError::TemplateNotFound { ref key } if key == TEMPLATE_KEY));
}

const EDX_DOCUMENT: &str = r#"
<script type="text/template" id="search_item-tpl">
  <div class="result-excerpt"><%= excerpt %></div>
  <a class="result-link" data-note="<%= note %>" href="<%- url %>"><%- content.display_name %></a>
  <span class="result-location"><%- location %></span>
</script>
"#;

#[test]
fn nested_attribute_template_renders_and_navigates() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(EDX_DOCUMENT);

    let collection: ResultCollection = serde_json::from_value(json!({
        "searchTerm": "engines",
        "page": 1,
        "pageSize": 10,
        "results": [
            {
                "id": 7,
                "url": "/courses/engines/jump_to/block-7",
                "excerpt": "all about <b>engines</b>",
                "note": "rank > 3",
                "location": "Week 1",
                "content": { "display_name": "Engines & Motors" },
            },
        ],
    }))
    .unwrap();

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    let markup = list.render().element().inner_html().to_string();

    assert!(markup.contains(">Engines &amp; Motors</a>"));

    let (event, outcome) = list.click("7", 0).unwrap();

    assert!(event.default_prevented());
    assert_eq!(
        outcome,
        ClickOutcome::Navigated("/courses/engines/jump_to/block-7".into())
    );
    assert_eq!(
        payload(&emitted(&calls)[0]),
        json!({
            "search_term": "engines",
            "result_position": 10,
            "result_link": "7",
        })
    );
}

#[test]
fn raw_value_with_gt_keeps_the_link_followable() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::new().with_template(
        TEMPLATE_KEY,
        r#"<a data-note="<%= note %>" href="<%= url %>">go</a>"#,
    );

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.push(record("r1", "/course/r1").with_attribute("note", "a>b"));

    let mut list = ResultList::new(collection, &templates, bindings(&calls)).unwrap();
    list.render();
    let (_, outcome) = list.click("r1", 0).unwrap();

    assert_eq!(outcome, ClickOutcome::Navigated("/course/r1".into()));
    assert_eq!(navigations(&calls), vec!["/course/r1"]);
}

#[test]
fn duplicate_result_ids_fail_list_construction() {
    let calls = Rc::new(Calls::default());
    let templates = DocumentTemplates::from_html(DOCUMENT);

    let mut collection = ResultCollection::new("engines", 0, 5);
    collection.push(record("r1", "/course/r1"));
    collection.push(record("r2", "/course/r2"));
    collection.push(record("r1", "/course/r1-again"));

    let err = ResultList::new(collection, &templates, bindings(&calls)).err().unwrap();

    assert!(matches!(err, ViewError::DuplicateResultId { ref id } if id == "r1"));
}
