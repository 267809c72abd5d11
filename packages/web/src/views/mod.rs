mod shell;
pub use shell::{PrivateRoute, Shell};

mod login;
pub use login::Login;

mod login_success;
pub use login_success::LoginSuccess;

mod register;
pub use register::Register;

mod todos;
pub use todos::Todos;

mod profile;
pub use profile::Profile;
