pub mod frm2gif;
