//! Общие типы домена управления зданиями: агрегаты, перечисления,
//! конструктор этажей черновика и контракты UseCase.

pub mod domain;
pub mod enums;
pub mod usecases;
