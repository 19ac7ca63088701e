//! Unit tests for REST payload shapes and badge helpers.

use serde_json::json;

use super::*;

fn tool_item(id: i64) -> ToolItem {
    ToolItem {
        id,
        serial_number: format!("SN-{id}"),
        status: ToolStatus::Prestada,
        damage_level: DamageLevel::NoDanada,
        tool_type: None,
    }
}

fn loan() -> Loan {
    Loan {
        id: 9,
        loan_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        loan_time: Some("10:15:00".to_string()),
        return_date: NaiveDate::from_ymd_opt(2025, 5, 8).unwrap(),
        return_time: None,
        late_return_fee: Some(1500),
        status: "Activo".to_string(),
        validity: "Puntual".to_string(),
        client: Client {
            run: "7.654.321-K".to_string(),
            ..Default::default()
        },
        employee: None,
        loan_tools: vec![
            LoanTool {
                id: Some(30),
                tool_item: tool_item(1),
            },
            LoanTool {
                id: Some(31),
                tool_item: tool_item(2),
            },
        ],
    }
}

#[test]
fn test_badge_text() {
    assert_eq!(badge_text("GRAVEMENTE_DANADA"), "Gravemente Dañada");
    assert_eq!(badge_text("NO_DANADA"), "No Dañada");
    assert_eq!(badge_text("DADA_DE_BAJA"), "Dada De Baja");
    assert_eq!(badge_text("EN_EVALUACION"), "En Evaluacion");
    assert_eq!(badge_text("DISPONIBLE"), "Disponible");
    assert_eq!(badge_text(""), "");
}

#[test]
fn test_status_badge_classes() {
    assert_eq!(ToolStatus::Disponible.badge().class(), "badge badge-success");
    assert_eq!(ToolStatus::DadaDeBaja.badge().class(), "badge badge-error");
    assert_eq!(DamageLevel::EnEvaluacion.badge().class(), "badge badge-info");
    assert_eq!(DamageLevel::Irreparable.badge().text, "Irreparable");
}

#[test]
fn test_client_status_badge() {
    let mut client = Client {
        status: "Activo".to_string(),
        ..Default::default()
    };
    assert_eq!(client.status_badge().tone, BadgeTone::Success);

    client.status = "restringido".to_string();
    assert_eq!(client.status_badge().tone, BadgeTone::Error);

    client.status = "Suspendido".to_string();
    let badge = client.status_badge();
    assert_eq!(badge.tone, BadgeTone::Neutral);
    assert_eq!(badge.text, "Suspendido");
}

#[test]
fn test_loan_validity_badge() {
    let mut loan = loan();
    assert_eq!(loan.validity_badge().tone, BadgeTone::Success);

    loan.validity = "Atrasado".to_string();
    assert_eq!(loan.validity_badge().class(), "badge badge-error");

    loan.validity = "Finalizado".to_string();
    assert_eq!(loan.validity_badge().tone, BadgeTone::Neutral);

    loan.validity = String::new();
    assert_eq!(loan.validity_badge().tone, BadgeTone::Neutral);
}

#[test]
fn test_employee_role_badge() {
    let mut employee = Employee::default();
    assert_eq!(employee.role_badge().text, "Empleado");

    employee.is_admin = true;
    assert_eq!(employee.role_badge(), Badge::new("Administrador", BadgeTone::Primary));
}

#[test]
fn test_status_parsing() {
    assert_eq!(LoanStatus::parse(" activo "), Some(LoanStatus::Active));
    assert_eq!(LoanStatus::parse("Finalizado"), Some(LoanStatus::Finished));
    assert_eq!(LoanStatus::parse("x"), None);
    assert_eq!(ToolStatus::parse("EN_REPARACION"), Some(ToolStatus::EnReparacion));
    assert_eq!(DamageLevel::parse("en_evaluacion"), None);
}

#[test]
fn test_tool_item_from_backend_json() {
    let item: ToolItem = serde_json::from_value(json!({
        "id": 4,
        "serialNumber": "TAL-0004",
        "status": "EN_REPARACION",
        "damageLevel": "LEVEMENTE_DANADA",
        "toolType": {
            "id": 2,
            "name": "Taladro",
            "category": "Eléctricas",
            "model": "DHP482",
            "replacementValue": 90000,
            "rentalFee": 5000,
            "damageFee": 8000,
            "totalStock": 3,
            "availableStock": 1
        }
    }))
    .unwrap();

    assert_eq!(item.status, ToolStatus::EnReparacion);
    assert_eq!(item.damage_level, DamageLevel::LevementeDanada);
    assert_eq!(item.type_name(), "Taladro");
    assert_eq!(item.tool_type.unwrap().available_stock, Some(1));
}

#[test]
fn test_employee_admin_flag_name() {
    let employee: Employee = serde_json::from_value(json!({
        "run": "1-9",
        "name": "Luis",
        "surname": "Soto",
        "email": "l@x.cl",
        "cellphone": "+56911112222",
        "isAdmin": true
    }))
    .unwrap();
    assert!(employee.is_admin);
    assert_eq!(serde_json::to_value(&employee).unwrap()["isAdmin"], json!(true));
}

#[test]
fn test_tool_type_update_omits_unset_fields() {
    let update = ToolTypeUpdate {
        id: 3,
        rental_fee: Some(4500),
        replacement_value: None,
    };
    assert_eq!(serde_json::to_value(update).unwrap(), json!({ "id": 3, "rentalFee": 4500 }));
}

#[test]
fn test_new_loan_body() {
    let body = NewLoan {
        client: RunRef {
            run: "12.345.678-5".to_string(),
        },
        loan_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        loan_tools: vec![LoanToolRef { tool_item: IdRef { id: 11 } }],
    };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({
            "client": { "run": "12.345.678-5" },
            "loanDate": "2025-06-01",
            "returnDate": "2025-06-03",
            "loanTools": [{ "toolItem": { "id": 11 } }]
        })
    );
}

#[test]
fn test_loan_return_body() {
    let loan = loan();
    let body = LoanReturn::for_loan(&loan, "12.345.678-5", "17:40:00".to_string(), |id| {
        if id == 2 {
            DamageLevel::EnEvaluacion
        } else {
            DamageLevel::NoDanada
        }
    });

    assert_eq!(body.employee.run, "12.345.678-5");
    assert_eq!(body.client.run, "7.654.321-K");
    assert_eq!(body.return_time, "17:40:00");

    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["loanTools"][0], json!({ "id": 30, "toolItem": { "id": 1, "damageLevel": "NO_DANADA" } }));
    assert_eq!(value["loanTools"][1]["toolItem"]["damageLevel"], json!("EN_EVALUACION"));
    assert_eq!(value["lateReturnFee"], json!(1500));
}

#[test]
fn test_tool_type_filter() {
    let tool_type = ToolType {
        name: "Taladro".to_string(),
        model: "DHP482".to_string(),
        ..Default::default()
    };
    assert!(tool_type.matches_filter(""));
    assert!(tool_type.matches_filter("tala"));
    assert!(tool_type.matches_filter("dhp"));
    assert!(!tool_type.matches_filter("sierra"));
    assert_eq!(tool_type.label(), "Taladro (DHP482)");
}

#[test]
fn test_loan_is_active() {
    let mut loan = loan();
    assert!(loan.is_active());
    loan.status = "Finalizado".to_string();
    assert!(!loan.is_active());
}

#[test]
fn test_evaluation_outcome() {
    assert_eq!(DamageLevel::NoDanada.evaluation_outcome(), EvaluationOutcome::Available);
    assert_eq!(DamageLevel::LevementeDanada.evaluation_outcome(), EvaluationOutcome::InRepair);
    assert_eq!(DamageLevel::GravementeDanada.evaluation_outcome(), EvaluationOutcome::InRepair);
    assert_eq!(DamageLevel::Irreparable.evaluation_outcome(), EvaluationOutcome::Retired);
}
