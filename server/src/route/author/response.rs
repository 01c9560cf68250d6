use crate::controller::Exhaust;
use application::transfer::AuthorDto;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: i64,
    name: String,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

pub struct Presenter;

impl Exhaust<Vec<AuthorDto>> for Presenter {
    type To = Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        Json::from(
            input
                .into_iter()
                .map(AuthorResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}
