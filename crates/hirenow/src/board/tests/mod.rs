mod common;
mod persistence;
mod session;
