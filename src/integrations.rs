// External integrations module
// Collaborators that touch state outside the alias directory

pub mod path_env;
