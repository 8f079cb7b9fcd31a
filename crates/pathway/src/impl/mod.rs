mod account;
mod patch;
mod profile;
mod session;
