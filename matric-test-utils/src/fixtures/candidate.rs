use matric::model::api::CreateCandidateDto;

/// Standard candidate creation payload for tests, varying only the index
/// number.
pub fn mock_create_candidate(index_number: &str) -> CreateCandidateDto {
    CreateCandidateDto {
        index_number: index_number.to_string(),
        surname: "Mensah".to_string(),
        other_names: "Ama".to_string(),
        gender: Some("Female".to_string()),
        programme: Some("General Science".to_string()),
        residence: Some("Boarding".to_string()),
        aggregate: Some(12),
    }
}
