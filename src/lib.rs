/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 后端访问能力：配置、HTTP 客户端、接口模型。控制器之外也可以直接使用
pub mod backend {
    use crate::internal;
    pub use internal::backend::structs::*;
    pub use internal::backend::traits::*;

    pub mod functions {
        use crate::internal;
        pub use internal::backend::functions::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::backend::enums::*;
    }

    pub mod config {
        use crate::internal;
        pub use internal::backend::structs::backend_config::*;
    }
}

/// 下载任务控制器
pub mod controller {
    use crate::internal;
    pub use internal::controller::structs::*;
    pub use internal::controller::traits::*;

    pub mod config {
        use crate::internal;
        pub use internal::controller::structs::controller_config::*;
    }
}

/// 套餐、清晰度限制与定价页数据
pub mod entitlement {
    use crate::internal;
    pub use internal::entitlement::catalog::*;
    pub use internal::entitlement::plan::*;
    pub use internal::entitlement::policy::*;
    pub use internal::entitlement::quality_gate::*;
}

pub mod history {
    use crate::internal;
    pub use internal::history::download_history::*;
    pub use internal::history::file_kind::*;
}

pub mod states {
    use crate::internal;
    pub use internal::states::queue_reactive::*;
    pub use internal::states::reactive_core::*;
}
