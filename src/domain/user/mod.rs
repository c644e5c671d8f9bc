pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{
    LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserLoginResponse,
    UserProfileUpdateResponse, UserRegistrationResponse,
};
pub use error::UserServiceError;
pub use model::{User, UserProfile, UserRole};
pub use service::UserService;
