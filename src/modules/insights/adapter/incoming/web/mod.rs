pub mod routes;
mod view;
