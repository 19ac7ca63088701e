use dioxus::prelude::*;
use tr_types::web::Kardex;

#[derive(Clone, PartialEq, Debug)]
pub struct TableColumn {
    pub title: &'static str,
    pub alignment: ColumnAlignment,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ColumnAlignment {
    #[default]
    Left,
    Right,
}

impl ColumnAlignment {
    fn class(self) -> &'static str {
        match self {
            ColumnAlignment::Left => "text-left",
            ColumnAlignment::Right => "text-right",
        }
    }
}

impl TableColumn {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            alignment: ColumnAlignment::Left,
        }
    }

    pub fn align_right(mut self) -> Self {
        self.alignment = ColumnAlignment::Right;
        self
    }
}

#[component]
pub fn Table(
    #[props(default = "table table-zebra table-pin-rows")] class: &'static str,
    columns: Vec<TableColumn>,
    /// Shown across all columns when there are no rows.
    empty: Option<String>,
    children: Element,
) -> Element {
    let span = columns.len().to_string();

    rsx! {
        div { class: "overflow-x-auto max-h-[600px] rounded-box border border-base-300",
            table { class,
                thead {
                    tr {
                        for col in columns {
                            th { class: col.alignment.class(), "{col.title}" }
                        }
                    }
                }
                tbody {
                    if let Some(message) = empty {
                        tr {
                            td { class: "text-center", colspan: "{span}", "{message}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

/// Stock movements, optionally with the tool each one belongs to.
#[component]
pub fn KardexTable(movements: Vec<Kardex>, #[props(default)] show_tool: bool, empty_message: String) -> Element {
    let mut columns = vec![TableColumn::new("ID"), TableColumn::new("Fecha")];
    if show_tool {
        columns.push(TableColumn::new("Herramienta"));
    }
    columns.push(TableColumn::new("Tipo de Operación"));
    columns.push(TableColumn::new("Stock Involucrado").align_right());

    let empty = movements.is_empty().then_some(empty_message);

    rsx! {
        Table { columns, empty,
            for movement in movements {
                tr { key: "{movement.id}", class: "hover",
                    td { "{movement.id}" }
                    td { "{movement.date}" }
                    if show_tool {
                        td {
                            {movement.tool_type.as_ref().map(|t| t.label()).unwrap_or_else(|| "-".to_string())}
                        }
                    }
                    td { "{movement.operation_type}" }
                    td { class: "text-right", "{movement.stock_involved}" }
                }
            }
        }
    }
}

/// Status line while a fetch is pending.
#[component]
pub fn LoadingLine(#[props(default = "Cargando...")] message: &'static str) -> Element {
    rsx! {
        div { class: "flex items-center gap-2 p-4",
            span { class: "loading loading-spinner loading-md" }
            p { "{message}" }
        }
    }
}

#[component]
pub fn ErrorLine(message: String) -> Element {
    rsx! {
        div { role: "alert", class: "alert alert-error alert-soft my-4",
            span { "{message}" }
        }
    }
}
