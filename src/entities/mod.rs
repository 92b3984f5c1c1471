pub mod evento;
pub mod localidade;
pub mod ocorrencia;
pub mod postagem;
pub mod usuario;

pub use evento::Entity as Evento;
pub use localidade::Entity as Localidade;
pub use ocorrencia::Entity as Ocorrencia;
pub use postagem::Entity as Postagem;
pub use usuario::Entity as Usuario;
