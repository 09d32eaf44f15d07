//! 场景状态模块
//!
//! 为每帧的 uniform 绑定提供只读的取值来源：
//! - Scene: 相机矩阵快照、雾色、帧间隔时间、后端约定
//! - Camera: 相机组件（投影参数与缓存矩阵）
//! - RenderObject: 被绘制对象（世界矩阵）

pub mod camera;
pub mod object;
pub mod scene;

// 重新导出常用类型
pub use camera::{Camera, ProjectionType};
pub use object::RenderObject;
pub use scene::{Scene, YOrigin};
