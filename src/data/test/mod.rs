mod bonus;
mod employee;
mod notification;
mod role;
mod sanction;
mod user;
