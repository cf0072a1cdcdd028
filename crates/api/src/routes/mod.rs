pub mod health;

use axum::routing::get;
use axum::Router;
use storefront_db::repositories::{
    CategoryRepo, EmployeeRepo, EmployeeTypeRepo, InventoryRepo, OrderRepo, PersonRepo,
    ProductRepo, RoleRepo,
};

use crate::handlers::resource;
use crate::resources::Resource;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Every resource gets the same five routes:
///
/// ```text
/// /{resource}          list, create
/// /{resource}/{id}     get, update, delete
/// ```
///
/// with `{resource}` one of `roles`, `employee-types`, `persons`,
/// `employees`, `categories`, `products`, `inventory`, `orders`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_router::<RoleRepo>())
        .merge(resource_router::<EmployeeTypeRepo>())
        .merge(resource_router::<PersonRepo>())
        .merge(resource_router::<EmployeeRepo>())
        .merge(resource_router::<CategoryRepo>())
        .merge(resource_router::<ProductRepo>())
        .merge(resource_router::<InventoryRepo>())
        .merge(resource_router::<OrderRepo>())
}

/// Routes for a single resource, mounted at its kind's path segment.
pub fn resource_router<R: Resource>() -> Router<AppState> {
    let base = format!("/{}", R::KIND.route());
    Router::new()
        .route(&base, get(resource::list::<R>).post(resource::create::<R>))
        .route(
            &format!("{base}/{{id}}"),
            get(resource::get_by_id::<R>)
                .put(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
}
