use dioxus::prelude::*;
use tr_types::web::{Badge, Client, Employee, Loan, ToolItem, ToolType};

/// Uppercased first letter of `name`, or `fallback` when blank.
pub fn initial(name: &str, fallback: char) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(fallback)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() { placeholder } else { value }
}

#[component]
pub fn StatusBadge(badge: Badge) -> Element {
    rsx! {
        span { class: badge.class(), "{badge.text}" }
    }
}

#[component]
fn DetailRow(label: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "flex justify-between gap-2 text-sm",
            strong { "{label}" }
            span { class: "text-right", {children} }
        }
    }
}

#[component]
fn Avatar(letter: char) -> Element {
    rsx! {
        div { class: "avatar avatar-placeholder",
            div { class: "bg-primary text-primary-content w-12 rounded-full",
                span { class: "text-xl", "{letter}" }
            }
        }
    }
}

#[component]
pub fn EmployeeCard(employee: Employee) -> Element {
    let letter = initial(&employee.name, 'U');
    let email = or_placeholder(&employee.email, "Sin email");
    let cellphone = or_placeholder(&employee.cellphone, "Sin celular");

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body gap-3",
                div { class: "flex items-center gap-3",
                    Avatar { letter }
                    div {
                        h3 { class: "card-title", "{employee.name} {employee.surname}" }
                        span { class: "text-sm opacity-70", "{employee.run}" }
                    }
                }
                DetailRow { label: "Email:", "{email}" }
                DetailRow { label: "Celular:", "{cellphone}" }
                div { class: "card-actions justify-end",
                    StatusBadge { badge: employee.role_badge() }
                }
            }
        }
    }
}

#[component]
pub fn ClientCard(client: Client) -> Element {
    let letter = initial(&client.name, 'U');
    let email = or_placeholder(&client.email, "Sin email");
    let cellphone = or_placeholder(&client.cellphone, "Sin celular");
    let debt = if client.debt > 0 {
        format!("${}", client.debt)
    } else {
        "Sin deuda".to_string()
    };
    let tools = if client.active_loans > 0 {
        client.active_loans.to_string()
    } else {
        "Sin herramientas en posesión".to_string()
    };

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body gap-3",
                div { class: "flex items-center gap-3",
                    Avatar { letter }
                    div {
                        h3 { class: "card-title", "{client.name} {client.surname}" }
                        span { class: "text-sm opacity-70", "{client.run}" }
                    }
                }
                DetailRow { label: "Email:", "{email}" }
                DetailRow { label: "Celular:", "{cellphone}" }
                DetailRow { label: "Deuda:", "{debt}" }
                DetailRow { label: "Herramientas en posesion:", "{tools}" }
                div { class: "card-actions justify-end",
                    StatusBadge { badge: client.status_badge() }
                }
            }
        }
    }
}

#[component]
pub fn ToolTypeCard(tool_type: ToolType) -> Element {
    let available = tool_type.available_stock.unwrap_or(0);
    let total = tool_type.total_stock.unwrap_or(0);
    let stock_class = if available > 0 { "text-success" } else { "text-error" };

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body gap-2",
                h3 { class: "card-title", "{tool_type.name}" }
                div { class: "flex gap-2 text-sm opacity-70",
                    span { "{tool_type.category}" }
                    span { "•" }
                    span { "{tool_type.model}" }
                }
                div { class: "flex justify-between items-baseline",
                    strong { "Disponibilidad:" }
                    span { class: "text-lg {stock_class}",
                        "{available} "
                        small { class: "opacity-70", "/ {total} Unidades" }
                    }
                }
                DetailRow { label: "Arriendo:", "${tool_type.rental_fee}" }
                DetailRow { label: "Multa por Daño:", "${tool_type.damage_fee}" }
                DetailRow { label: "Valor de Reposición:", "${tool_type.replacement_value}" }
            }
        }
    }
}

#[component]
pub fn ToolItemCard(item: ToolItem) -> Element {
    let name = match &item.tool_type {
        Some(tool_type) if !tool_type.name.trim().is_empty() => tool_type.name.clone(),
        _ => "Nombre no disponible".to_string(),
    };

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body gap-2",
                h3 { class: "card-title", "{name}" }
                DetailRow { label: "Número de Serie:", "{item.serial_number}" }
                div { class: "card-actions justify-end gap-2",
                    StatusBadge { badge: item.status.badge() }
                    StatusBadge { badge: item.damage_level.badge() }
                }
            }
        }
    }
}

#[component]
pub fn LoanCard(loan: Loan) -> Element {
    let client_name = or_placeholder(&loan.client.name, "Cliente Desconocido").to_string();
    let letter = initial(&loan.client.name, 'C');
    let loan_time = loan.loan_time.clone().unwrap_or_default();
    let fee = loan.late_return_fee.unwrap_or(0);

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body gap-2",
                div { class: "flex items-center gap-3",
                    Avatar { letter }
                    div {
                        h3 { class: "card-title", "{client_name}" }
                        span { class: "text-sm opacity-70", "RUT: {loan.client.run}" }
                    }
                }
                DetailRow { label: "ID Préstamo:", "#{loan.id}" }
                DetailRow { label: "F. Préstamo:", "{loan.loan_date} ({loan_time})" }
                DetailRow { label: "F. Devolución Estimada:", "{loan.return_date}" }
                DetailRow { label: "Multa Diaria:", "${fee}" }
                DetailRow { label: "Estado:", "{loan.status}" }
                div { class: "card-actions justify-end",
                    StatusBadge { badge: loan.validity_badge() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_uses_first_letter_uppercased() {
        assert_eq!(initial("maría", 'U'), 'M');
        assert_eq!(initial("  ana", 'U'), 'A');
    }

    #[test]
    fn initial_falls_back_when_blank() {
        assert_eq!(initial("", 'C'), 'C');
        assert_eq!(initial("   ", 'U'), 'U');
    }

    #[test]
    fn placeholders_replace_blank_values() {
        assert_eq!(or_placeholder("", "Sin email"), "Sin email");
        assert_eq!(or_placeholder("a@b.cl", "Sin email"), "a@b.cl");
    }
}
