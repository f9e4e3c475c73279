use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo::Pet;

/// Request body for adding a pet. The wire field is `type`; the column and
/// the Rust side call it `species`.
#[derive(Debug, Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
}

#[derive(Debug, Serialize)]
pub struct PetResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_maps_to_type_on_the_wire() {
        let req: CreatePetRequest =
            serde_json::from_str(r#"{"name":"Bobby","type":"dog"}"#).expect("valid pet body");
        assert_eq!(req.name, "Bobby");
        assert_eq!(req.species, "dog");

        let res = PetResponse {
            id: Uuid::new_v4(),
            name: "Bobby".into(),
            species: "dog".into(),
        };
        let json = serde_json::to_string(&res).expect("serialize");
        assert!(json.contains(r#""type":"dog""#));
        assert!(!json.contains("species"));
    }
}
