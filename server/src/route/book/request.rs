use crate::controller::Intake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetBookDto, ListBookDto, UpdateBookDto,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    title: String,
    author: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    title: String,
    author: String,
}

#[derive(Debug)]
pub struct DeleteRequest {
    id: i64,
}

impl DeleteRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListRequest {
    author: Option<String>,
}

#[derive(Debug)]
pub struct GetRequest {
    id: i64,
}

impl GetRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<CreateRequest> for Transformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: input.author,
        }
    }
}

impl Intake<(i64, UpdateRequest)> for Transformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (i64, UpdateRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            title: input.title,
            author: input.author,
        }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<ListRequest> for Transformer {
    type To = ListBookDto;
    fn emit(&self, input: ListRequest) -> Self::To {
        ListBookDto {
            author: input.author,
        }
    }
}
