pub mod autoridad;
pub mod cantidades;
pub mod cit_categoria;
pub mod cit_cita;
pub mod cit_cliente;
pub mod cit_cliente_registro;
pub mod cit_dia_inhabil;
pub mod cit_servicio;
pub mod distrito;
pub mod materia;
pub mod modulo;
pub mod oficina;
pub mod permiso;
pub mod rol;
pub mod usuario;
pub mod usuario_rol;

pub use autoridad::Autoridad;
pub use cantidades::{CantidadAgendada, CantidadCreada};
pub use cit_categoria::CitCategoria;
pub use cit_cita::{CitCita, EstadoCita};
pub use cit_cliente::CitCliente;
pub use cit_cliente_registro::CitClienteRegistro;
pub use cit_dia_inhabil::CitDiaInhabil;
pub use cit_servicio::CitServicio;
pub use distrito::Distrito;
pub use materia::Materia;
pub use modulo::Modulo;
pub use oficina::Oficina;
pub use permiso::Permiso;
pub use rol::Rol;
pub use usuario::{Usuario, UsuarioInDb};
pub use usuario_rol::UsuarioRol;
