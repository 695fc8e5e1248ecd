//! Перечисления справочников с кодом (для API и фильтров) и подписью (для UI)

/// Объявляет перечисление с `code()` / `label()` / `from_code()` / `options()`.
/// Первый вариант считается значением по умолчанию.
///
/// Код, которого нет в справочнике, не ломает разбор всей записи: он
/// сохраняется в варианте `Unknown` и уходит обратно на сервер без изменений.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Код, пришедший с сервера, но неизвестный клиенту
            Unknown(String),
        }

        impl $name {
            /// Известные варианты в порядке объявления
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Код для API и фильтров
            pub fn code(&self) -> &str {
                match self {
                    $($name::$variant => $code,)+
                    $name::Unknown(code) => code,
                }
            }

            /// Человекочитаемое название; для неизвестного кода сам код
            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unknown(code) => code,
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }

            /// Позиция в справочнике, неизвестные коды в конце
            pub fn rank(&self) -> usize {
                Self::ALL
                    .iter()
                    .position(|v| v == self)
                    .unwrap_or(Self::ALL.len())
            }

            /// Пары (`code`, `label`) для выпадающих списков
            pub fn options() -> Vec<(&'static str, &'static str)> {
                vec![$(($code, $label)),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0].clone()
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self::from_code(&code).unwrap_or($name::Unknown(code))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.code().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

code_enum! {
    /// Тип клиента
    CustomerType {
        Individual => ("individual", "Cá nhân"),
        Business => ("business", "Doanh nghiệp"),
    }
}

code_enum! {
    /// Роль пользователя системы
    UserRole {
        Staff => ("staff", "Nhân viên"),
        Manager => ("manager", "Quản lý"),
        Admin => ("admin", "Quản trị viên"),
    }
}

code_enum! {
    AddonType {
        Feature => ("feature", "Tính năng"),
        Storage => ("storage", "Lưu trữ"),
        Support => ("support", "Hỗ trợ"),
        Integration => ("integration", "Tích hợp"),
    }
}

code_enum! {
    ServiceCategory {
        Software => ("software", "Phần mềm"),
        Hosting => ("hosting", "Hosting"),
        Consulting => ("consulting", "Tư vấn"),
        Maintenance => ("maintenance", "Bảo trì"),
    }
}

code_enum! {
    /// Периодичность оплаты услуги
    BillingCycle {
        Monthly => ("monthly", "Hàng tháng"),
        Yearly => ("yearly", "Hàng năm"),
        OneTime => ("one_time", "Một lần"),
    }
}

code_enum! {
    ContractStatus {
        Active => ("active", "Đang hiệu lực"),
        Expired => ("expired", "Hết hạn"),
        Terminated => ("terminated", "Đã chấm dứt"),
    }
}

code_enum! {
    /// Этап сделки
    DealStage {
        New => ("new", "Mới"),
        Negotiation => ("negotiation", "Đang đàm phán"),
        Won => ("won", "Thành công"),
        Lost => ("lost", "Thất bại"),
    }
}

code_enum! {
    TicketPriority {
        Low => ("low", "Thấp"),
        Medium => ("medium", "Trung bình"),
        High => ("high", "Cao"),
        Urgent => ("urgent", "Khẩn cấp"),
    }
}

code_enum! {
    TicketStatus {
        Open => ("open", "Mới mở"),
        InProgress => ("in_progress", "Đang xử lý"),
        Resolved => ("resolved", "Đã giải quyết"),
        Closed => ("closed", "Đã đóng"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for stage in DealStage::ALL {
            assert_eq!(DealStage::from_code(stage.code()), Some(stage.clone()));
        }
        assert_eq!(TicketStatus::from_code("unknown"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_default_and_options() {
        assert_eq!(CustomerType::default(), CustomerType::Individual);
        assert_eq!(BillingCycle::options()[2], ("one_time", "Một lần"));
        assert_eq!(UserRole::Manager.to_string(), "manager");
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let stage: DealStage = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(stage, DealStage::Unknown("on_hold".into()));
        assert!(!stage.is_known());
        assert_eq!(stage.code(), "on_hold");
        assert_eq!(stage.label(), "on_hold");
        assert_eq!(serde_json::to_string(&stage).unwrap(), "\"on_hold\"");
        assert_eq!(DealStage::options().len(), DealStage::ALL.len());
    }

    #[test]
    fn test_rank_puts_unknown_last() {
        assert_eq!(TicketPriority::Low.rank(), 0);
        assert_eq!(TicketPriority::Urgent.rank(), 3);
        assert_eq!(TicketPriority::Unknown("p0".into()).rank(), 4);
    }
}
