use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use application::service::GetAuthorService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

use self::response::Presenter;

mod response;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move { module.list_authors().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
