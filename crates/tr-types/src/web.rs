//! REST payloads exchanged with the ToolRent backend, plus the badge helpers
//! the views use to render their status fields.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client as returned by `/api/clients`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub run: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub cellphone: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub debt: i64,
    #[serde(default)]
    pub active_loans: i64,
}

/// Body of `POST /api/clients`. Status, debt and loan count are backend-owned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub run: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub cellphone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub run: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub cellphone: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl Employee {
    pub fn role_badge(&self) -> Badge {
        if self.is_admin {
            Badge::new("Administrador", BadgeTone::Primary)
        } else {
            Badge::new("Empleado", BadgeTone::Secondary)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub model: String,
    pub replacement_value: i64,
    pub rental_fee: i64,
    pub damage_fee: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_stock: Option<i64>,
}

impl ToolType {
    /// Label used by the tool-type pickers.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.model)
    }

    /// Case-insensitive match on name or model, used by picker filters.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        filter.is_empty() || self.name.to_lowercase().contains(&filter) || self.model.to_lowercase().contains(&filter)
    }
}

/// Partial update for `PUT /api/tool-types/tool-type/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolTypeUpdate {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_fee: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_value: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolStatus {
    Disponible,
    Prestada,
    EnReparacion,
    DadaDeBaja,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolStatus::Disponible => "DISPONIBLE",
            ToolStatus::Prestada => "PRESTADA",
            ToolStatus::EnReparacion => "EN_REPARACION",
            ToolStatus::DadaDeBaja => "DADA_DE_BAJA",
        }
    }

    pub fn all_variants() -> &'static [ToolStatus] {
        &[
            ToolStatus::Disponible,
            ToolStatus::Prestada,
            ToolStatus::EnReparacion,
            ToolStatus::DadaDeBaja,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all_variants().iter().copied().find(|s| s.as_str() == value)
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ToolStatus::Disponible => BadgeTone::Success,
            ToolStatus::Prestada => BadgeTone::Info,
            ToolStatus::EnReparacion => BadgeTone::Warning,
            ToolStatus::DadaDeBaja => BadgeTone::Error,
        }
    }

    pub fn badge(&self) -> Badge {
        Badge::new(badge_text(self.as_str()), self.tone())
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DamageLevel {
    NoDanada,
    LevementeDanada,
    Danada,
    GravementeDanada,
    Irreparable,
    Desuso,
    EnEvaluacion,
}

impl DamageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageLevel::NoDanada => "NO_DANADA",
            DamageLevel::LevementeDanada => "LEVEMENTE_DANADA",
            DamageLevel::Danada => "DANADA",
            DamageLevel::GravementeDanada => "GRAVEMENTE_DANADA",
            DamageLevel::Irreparable => "IRREPARABLE",
            DamageLevel::Desuso => "DESUSO",
            DamageLevel::EnEvaluacion => "EN_EVALUACION",
        }
    }

    pub fn all_variants() -> &'static [DamageLevel] {
        &[
            DamageLevel::NoDanada,
            DamageLevel::LevementeDanada,
            DamageLevel::Danada,
            DamageLevel::GravementeDanada,
            DamageLevel::Irreparable,
            DamageLevel::Desuso,
            DamageLevel::EnEvaluacion,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all_variants().iter().copied().find(|d| d.as_str() == value)
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            DamageLevel::NoDanada => BadgeTone::Success,
            DamageLevel::LevementeDanada | DamageLevel::Danada => BadgeTone::Warning,
            DamageLevel::GravementeDanada | DamageLevel::Irreparable => BadgeTone::Error,
            DamageLevel::Desuso => BadgeTone::Neutral,
            DamageLevel::EnEvaluacion => BadgeTone::Info,
        }
    }

    pub fn badge(&self) -> Badge {
        Badge::new(badge_text(self.as_str()), self.tone())
    }
}

/// What the backend does to a unit and the last client after a damage evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvaluationOutcome {
    /// Back to `DISPONIBLE`, no charge.
    Available,
    /// `EN_REPARACION`, the damage fee is charged.
    InRepair,
    /// `DADA_DE_BAJA`, the replacement value is charged.
    Retired,
}

impl DamageLevel {
    pub fn evaluation_outcome(&self) -> EvaluationOutcome {
        match self {
            DamageLevel::NoDanada => EvaluationOutcome::Available,
            DamageLevel::Irreparable | DamageLevel::Desuso => EvaluationOutcome::Retired,
            _ => EvaluationOutcome::InRepair,
        }
    }
}

impl fmt::Display for DamageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolItem {
    pub id: i64,
    pub serial_number: String,
    pub status: ToolStatus,
    pub damage_level: DamageLevel,
    #[serde(default)]
    pub tool_type: Option<ToolType>,
}

impl ToolItem {
    /// Tool-type name, or a generic label when the backend omitted it.
    pub fn type_name(&self) -> &str {
        self.tool_type.as_ref().map(|t| t.name.as_str()).unwrap_or("Herramienta")
    }
}

/// Reference to an existing record by numeric id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i64,
}

/// Reference to an existing client or employee by RUN.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRef {
    pub run: String,
}

/// Body of `POST /api/tool-items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewToolItem {
    pub serial_number: String,
    pub status: ToolStatus,
    pub damage_level: DamageLevel,
    pub tool_type: IdRef,
}

/// Body of `PUT /api/tool-items/disable-tool-item/{sn}` and `evaluate-damage/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageUpdate {
    pub damage_level: DamageLevel,
}

/// Whether a loan is still open. Stored as free text by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoanStatus {
    Active,
    Finished,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "Activo",
            LoanStatus::Finished => "Finalizado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "ACTIVO" => Some(LoanStatus::Active),
            "FINALIZADO" => Some(LoanStatus::Finished),
            _ => None,
        }
    }
}

/// Timeliness of a loan as computed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoanValidity {
    Current,
    OnTime,
    Late,
    Finished,
}

impl LoanValidity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "VIGENTE" => Some(LoanValidity::Current),
            "PUNTUAL" => Some(LoanValidity::OnTime),
            "ATRASADO" => Some(LoanValidity::Late),
            "FINALIZADO" => Some(LoanValidity::Finished),
            _ => None,
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            LoanValidity::Current | LoanValidity::OnTime => BadgeTone::Success,
            LoanValidity::Late => BadgeTone::Error,
            LoanValidity::Finished => BadgeTone::Neutral,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientStatus {
    Active,
    Restricted,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Activo",
            ClientStatus::Restricted => "Restringido",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "ACTIVO" => Some(ClientStatus::Active),
            "RESTRINGIDO" => Some(ClientStatus::Restricted),
            _ => None,
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ClientStatus::Active => BadgeTone::Success,
            ClientStatus::Restricted => BadgeTone::Error,
        }
    }
}

impl Client {
    pub fn status_badge(&self) -> Badge {
        let tone = ClientStatus::parse(&self.status).map(|s| s.tone()).unwrap_or_default();
        Badge::new(self.status.clone(), tone)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTool {
    #[serde(default)]
    pub id: Option<i64>,
    pub tool_item: ToolItem,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    pub loan_date: NaiveDate,
    #[serde(default)]
    pub loan_time: Option<String>,
    pub return_date: NaiveDate,
    #[serde(default)]
    pub return_time: Option<String>,
    #[serde(default)]
    pub late_return_fee: Option<i64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub validity: String,
    pub client: Client,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub loan_tools: Vec<LoanTool>,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        LoanStatus::parse(&self.status) == Some(LoanStatus::Active)
    }

    pub fn validity_badge(&self) -> Badge {
        let tone = LoanValidity::parse(&self.validity).map(|v| v.tone()).unwrap_or_default();
        Badge::new(self.validity.clone(), tone)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanToolRef {
    pub tool_item: IdRef,
}

/// Body of `POST /api/loans`. The employee is taken from the bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    pub client: RunRef,
    pub loan_date: NaiveDate,
    pub return_date: NaiveDate,
    pub loan_tools: Vec<LoanToolRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnedItem {
    pub id: i64,
    pub damage_level: DamageLevel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnedTool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub tool_item: ReturnedItem,
}

/// Body of `PUT /api/loans/return/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanReturn {
    pub id: i64,
    pub loan_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_time: Option<String>,
    pub return_date: NaiveDate,
    pub return_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_return_fee: Option<i64>,
    pub status: String,
    pub validity: String,
    pub client: RunRef,
    pub employee: RunRef,
    pub loan_tools: Vec<ReturnedTool>,
}

impl LoanReturn {
    /// Build the return body for `loan`, received by `employee_run` at `return_time`.
    ///
    /// `condition` gives the reception condition of each tool item by id.
    pub fn for_loan(
        loan: &Loan,
        employee_run: &str,
        return_time: String,
        condition: impl Fn(i64) -> DamageLevel,
    ) -> Self {
        Self {
            id: loan.id,
            loan_date: loan.loan_date,
            loan_time: loan.loan_time.clone(),
            return_date: loan.return_date,
            return_time,
            late_return_fee: loan.late_return_fee,
            status: loan.status.clone(),
            validity: loan.validity.clone(),
            client: RunRef {
                run: loan.client.run.clone(),
            },
            employee: RunRef {
                run: employee_run.to_string(),
            },
            loan_tools: loan
                .loan_tools
                .iter()
                .map(|lt| ReturnedTool {
                    id: lt.id,
                    tool_item: ReturnedItem {
                        id: lt.tool_item.id,
                        damage_level: condition(lt.tool_item.id),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kardex {
    pub id: i64,
    pub operation_type: String,
    pub date: NaiveDate,
    pub stock_involved: i64,
    #[serde(default)]
    pub tool_type: Option<ToolType>,
}

/// daisyUI colour of a badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "badge badge-primary",
            BadgeTone::Secondary => "badge badge-secondary",
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Warning => "badge badge-warning",
            BadgeTone::Error => "badge badge-error",
            BadgeTone::Info => "badge badge-info",
            BadgeTone::Neutral => "badge badge-ghost",
        }
    }
}

/// Text plus colour, ready to drop into a `span`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub tone: BadgeTone,
}

impl Badge {
    pub fn new(text: impl Into<String>, tone: BadgeTone) -> Self {
        Self { text: text.into(), tone }
    }

    pub fn class(&self) -> &'static str {
        self.tone.class()
    }
}

/// Turn an enum constant into display text: `"GRAVEMENTE_DANADA"` -> `"Gravemente Dañada"`.
pub fn badge_text(raw: &str) -> String {
    let lowered = raw.replace('_', " ").to_lowercase().replacen("danada", "dañada", 1);
    lowered
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "web_tests.rs"]
mod tests;
