mod animal;
mod auth;
mod titular;
