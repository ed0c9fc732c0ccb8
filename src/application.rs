pub mod verif_service;
