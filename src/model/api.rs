use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Plain confirmation message for operations with no payload
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerifyRequestDto {
    pub index_number: String,
}

/// Candidate record as exposed over the API. The PIN hash is never included.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateDto {
    pub index_number: String,
    pub surname: String,
    pub other_names: String,
    pub gender: Option<String>,
    pub programme: Option<String>,
    pub residence: Option<String>,
    pub aggregate: Option<i32>,
    pub fee_paid: bool,
    pub serial_number: Option<String>,
    pub phone_number: Option<String>,
    pub house_id: Option<i32>,
    pub house_name: Option<String>,
    pub application_number: Option<String>,
    pub guardian_info: Option<serde_json::Value>,
    pub additional_info: Option<serde_json::Value>,
    pub academic_info: Option<serde_json::Value>,
    pub uploads: Option<serde_json::Value>,
}

impl From<entity::candidate::Model> for CandidateDto {
    fn from(model: entity::candidate::Model) -> Self {
        Self {
            index_number: model.index_number,
            surname: model.surname,
            other_names: model.other_names,
            gender: model.gender,
            programme: model.programme,
            residence: model.residence,
            aggregate: model.aggregate,
            fee_paid: model.fee_paid,
            serial_number: model.serial_number,
            phone_number: model.phone_number,
            house_id: model.house_id,
            house_name: model.house_name,
            application_number: model.application_number,
            guardian_info: model.guardian_info,
            additional_info: model.additional_info,
            academic_info: model.academic_info,
            uploads: model.uploads,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCandidateDto {
    pub index_number: String,
    pub surname: String,
    pub other_names: String,
    pub gender: Option<String>,
    pub programme: Option<String>,
    pub residence: Option<String>,
    pub aggregate: Option<i32>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateCandidateDto {
    pub surname: Option<String>,
    pub other_names: Option<String>,
    pub gender: Option<String>,
    pub programme: Option<String>,
    pub residence: Option<String>,
    pub aggregate: Option<i32>,
    pub phone_number: Option<String>,
    pub guardian_info: Option<serde_json::Value>,
    pub additional_info: Option<serde_json::Value>,
    pub academic_info: Option<serde_json::Value>,
    pub uploads: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CandidateLoginDto {
    pub serial_number: String,
    pub pin: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminLoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateAdminUserDto {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<entity::admin_user::Model> for AdminUserDto {
    fn from(model: entity::admin_user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            role: model.role,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HouseDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub capacity: i32,
    pub current_occupancy: i32,
}

impl From<entity::house::Model> for HouseDto {
    fn from(model: entity::house::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            capacity: model.capacity,
            current_occupancy: model.current_occupancy,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateHouseDto {
    pub name: String,
    pub gender: String,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AllocateRequestDto {
    /// Overrides the candidate's recorded gender when present.
    pub gender: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AllocatedHouseDto {
    pub house_id: i32,
    pub house_name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReassignRequestDto {
    pub house_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApplicationNumberDto {
    pub application_number: String,
    /// 1-based sequence position for the day of generation.
    pub position: u32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InitiatePaymentDto {
    pub index_number: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckoutDto {
    pub checkout_url: String,
    pub client_reference: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaymentStatusDto {
    pub client_reference: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VoucherRequestDto {
    pub index_number: String,
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RecoverPinDto {
    pub index_number: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProgrammeDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::programme::Model> for ProgrammeDto {
    fn from(model: entity::programme::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateProgrammeDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SchoolClassDto {
    pub id: i32,
    pub name: String,
    pub programme: String,
}

impl From<entity::school_class::Model> for SchoolClassDto {
    fn from(model: entity::school_class::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            programme: model.programme,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateSchoolClassDto {
    pub name: String,
    pub programme: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DocumentDto {
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl From<entity::document::Model> for DocumentDto {
    fn from(model: entity::document::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            url: model.url,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateDocumentDto {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ActivityLogDto {
    pub id: i32,
    pub name: String,
    pub activity_details: String,
    pub time_in: NaiveDateTime,
    pub time_out: Option<NaiveDateTime>,
}

impl From<entity::admin_log::Model> for ActivityLogDto {
    fn from(model: entity::admin_log::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            activity_details: model.activity_details,
            time_in: model.time_in,
            time_out: model.time_out,
        }
    }
}

impl From<entity::candidate_log::Model> for ActivityLogDto {
    fn from(model: entity::candidate_log::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            activity_details: model.activity_details,
            time_in: model.time_in,
            time_out: model.time_out,
        }
    }
}
