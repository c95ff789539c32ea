mod controller;
mod setup;
