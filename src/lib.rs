use enclose::enc;
use seed::{prelude::*, *};
use web_sys::HtmlInputElement;

pub mod config;
pub mod fallback;
pub mod grade;
mod pattern;
pub mod picker;
pub mod rank;
pub mod short_name;

pub use config::{ConfigError, TenantConfig};
pub use fallback::synthesize_missing_senior_grades;
pub use grade::{GradeEntry, GradeLevelGroup, GradeRecord, Named, ResolvedGroup};
pub use picker::{build_picker, dedupe_by_short_name, GradeFilter, PickerGrade, PickerItem};
pub use rank::{extract_grade_rank, sort_grades_by_rank, UNRANKED};
pub use short_name::{short_name_for, GradeCategory};

use picker::{find_entry, grade_groups};

const ESC_KEY: u32 = 27;
const TENANT_KEY: &str = "schoolgrades-tenant";
const SELECTED_GRADE_KEY: &str = "schoolgrades-selected-grade";

// ------ ------
//     Model
// ------ ------

struct Model {
    config: TenantConfig,
    levels: Vec<ResolvedGroup>,
    filter: GradeFilter,
    selected: Option<GradeEntry>,
    refs: Refs,
}

#[derive(Default)]
struct Refs {
    search_input: ElRef<HtmlInputElement>,
}

// ------ ------
//     Init
// ------ ------

fn init(_: Url, _: &mut impl Orders<Msg>) -> Model {
    let config = load_tenant();
    let levels = config.resolved_levels();

    let placeholders = count_placeholders(&levels);
    if placeholders > 0 {
        log!("placeholder grades added for", config.school, placeholders);
    }

    let selected = load_selected(&levels);

    Model {
        config,
        levels,
        filter: GradeFilter::default(),
        selected,
        refs: Refs::default(),
    }
}

/// Raw tenant JSON as written by the admin shell, if any.
fn stored_tenant_json() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(TENANT_KEY)
        .ok()?
}

fn load_tenant() -> TenantConfig {
    match stored_tenant_json().map(|json| TenantConfig::from_json(&json)) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            error!("using default grades:", err.to_string());
            TenantConfig::defaults()
        }
        None => TenantConfig::defaults(),
    }
}

fn load_selected(levels: &[ResolvedGroup]) -> Option<GradeEntry> {
    // a missing key just means nothing was picked yet
    let id: String = LocalStorage::get(SELECTED_GRADE_KEY).ok()?;
    find_entry(levels, &id)
        .filter(|entry| entry.persistable_id().is_some())
        .cloned()
}

fn count_placeholders(levels: &[ResolvedGroup]) -> usize {
    levels.iter().map(ResolvedGroup::synthesized_count).sum()
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    CategoryFilterChanged(Option<GradeCategory>),
    SearchChanged(String),
    ClearFilter,

    SelectGrade(String),
    ClearSelection,

    NoOp,
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::CategoryFilterChanged(category) => {
            model.filter.category = category;
        }
        Msg::SearchChanged(search) => {
            model.filter.search = search;
        }
        Msg::ClearFilter => {
            model.filter = GradeFilter::default();

            let input = model.refs.search_input.clone();
            orders.after_next_render(move |_| {
                if let Some(input) = input.get() {
                    input.select();
                }
                Msg::NoOp
            });
        }

        Msg::SelectGrade(id) => {
            if let Some(entry) = find_entry(&model.levels, &id).cloned() {
                store_selection(&entry);
                model.selected = Some(entry);
            }
        }
        Msg::ClearSelection => {
            model.selected = None;
            if let Err(err) = LocalStorage::remove(SELECTED_GRADE_KEY) {
                error!("could not forget selected grade:", err);
            }
        }

        Msg::NoOp => (),
    }
}

fn store_selection(entry: &GradeEntry) {
    match entry.persistable_id() {
        Some(id) => {
            let id = id.to_owned();
            if let Err(err) = LocalStorage::insert(SELECTED_GRADE_KEY, &id) {
                error!("could not store selected grade:", err);
            }
        }
        None => {
            log!("placeholder grade selected, not stored:", entry.name());
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> Node<Msg> {
    div![
        C!["grade-picker"],
        view_header(
            &model.config.school,
            &grade_groups(&model.levels),
            &model.filter,
            &model.refs.search_input,
        ),
        view_main(&build_picker(&model.levels, &model.filter), &model.selected),
        view_footer(count_placeholders(&model.levels), &model.selected),
    ]
}

// ------ header ------

fn view_header(
    school: &str,
    categories: &[GradeCategory],
    filter: &GradeFilter,
    search_input: &ElRef<HtmlInputElement>,
) -> Node<Msg> {
    header![
        C!["header"],
        h1![school],
        div![
            C!["category-filter"],
            button![
                C!["active" => filter.category.is_none()],
                ev(Ev::Click, |_| Msg::CategoryFilterChanged(None)),
                "All"
            ],
            categories.iter().map(|&category| {
                button![
                    C!["active" => filter.category == Some(category)],
                    ev(Ev::Click, move |_| Msg::CategoryFilterChanged(Some(category))),
                    category.label()
                ]
            }),
        ],
        input![
            el_ref(search_input),
            C!["grade-search"],
            attrs! {
                At::Placeholder => "Search grades";
                At::Value => filter.search;
            },
            input_ev(Ev::Input, Msg::SearchChanged),
            keyboard_ev(Ev::KeyDown, |keyboard_event| {
                if keyboard_event.key_code() == ESC_KEY {
                    Msg::ClearFilter
                } else {
                    Msg::NoOp
                }
            }),
        ],
    ]
}

// ------ main ------

fn view_main(items: &[PickerItem], selected: &Option<GradeEntry>) -> Node<Msg> {
    section![
        C!["main"],
        ul![
            C!["grade-list"],
            items.iter().map(|item| view_item(item, selected))
        ]
    ]
}

fn view_item(item: &PickerItem, selected: &Option<GradeEntry>) -> Node<Msg> {
    match item {
        PickerItem::Separator => li![C!["separator"], hr![]],
        PickerItem::Grade(grade) => {
            let id = grade.entry.id().to_string();
            li![
                C![
                    "selected" => selected.as_ref().map_or(false, |entry| entry.id() == id),
                    "placeholder" => grade.entry.is_synthesized()
                ],
                button![
                    C!["grade-badge"],
                    attrs! {At::Title => grade.name()},
                    ev(Ev::Click, enc!((id) move |_| Msg::SelectGrade(id))),
                    grade.short_name.as_str()
                ],
                label![grade.name()],
            ]
        }
    }
}

// ------ footer ------

fn view_footer(placeholders: usize, selected: &Option<GradeEntry>) -> Node<Msg> {
    footer![
        C!["footer"],
        IF!(placeholders > 0 => span![
            C!["placeholder-note"],
            format!("{} grade(s) are placeholders until configured", placeholders)
        ]),
        match selected {
            Some(entry) => div![
                C!["selection"],
                format!("Selected: {}", entry.name()),
                button![
                    C!["clear-selection"],
                    ev(Ev::Click, |_| Msg::ClearSelection),
                    "Clear"
                ],
            ],
            None => empty![],
        },
    ]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn render() {
    App::start("app", init, update, view);
}
