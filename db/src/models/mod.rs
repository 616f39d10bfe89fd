pub mod product;
pub mod rayon;
pub mod sale;
pub mod user;

pub use product::Entity as Product;
pub use rayon::Entity as Rayon;
pub use sale::Entity as Sale;
pub use user::Entity as User;
