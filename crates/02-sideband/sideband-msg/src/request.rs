/// Request identifiers carried in the first body byte of a sideband message.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestId {
    GetMessageTransactionVersion = 0x00,
    LinkAddress = 0x01,
    ConnectionStatusNotify = 0x02,
    EnumPathResources = 0x10,
    AllocatePayload = 0x11,
    QueryPayload = 0x12,
    ResourceStatusNotify = 0x13,
    ClearPayloadIdTable = 0x14,
    RemoteDpcdRead = 0x20,
    RemoteDpcdWrite = 0x21,
    RemoteI2cRead = 0x22,
    RemoteI2cWrite = 0x23,
    PowerUpPhy = 0x24,
    PowerDownPhy = 0x25,
    SinkEventNotify = 0x30,
    QueryStreamEncryptionStatus = 0x38,
}

impl RequestId {
    /// Request id of a body byte; the top bit is the reply type flag and is ignored.
    pub fn from_u8(value: u8) -> Option<Self> {
        Some(match value & 0x7F {
            0x00 => RequestId::GetMessageTransactionVersion,
            0x01 => RequestId::LinkAddress,
            0x02 => RequestId::ConnectionStatusNotify,
            0x10 => RequestId::EnumPathResources,
            0x11 => RequestId::AllocatePayload,
            0x12 => RequestId::QueryPayload,
            0x13 => RequestId::ResourceStatusNotify,
            0x14 => RequestId::ClearPayloadIdTable,
            0x20 => RequestId::RemoteDpcdRead,
            0x21 => RequestId::RemoteDpcdWrite,
            0x22 => RequestId::RemoteI2cRead,
            0x23 => RequestId::RemoteI2cWrite,
            0x24 => RequestId::PowerUpPhy,
            0x25 => RequestId::PowerDownPhy,
            0x30 => RequestId::SinkEventNotify,
            0x38 => RequestId::QueryStreamEncryptionStatus,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            RequestId::GetMessageTransactionVersion => "GET_MESSAGE_TRANSACTION_VERSION",
            RequestId::LinkAddress => "LINK_ADDRESS",
            RequestId::ConnectionStatusNotify => "CONNECTION_STATUS_NOTIFY",
            RequestId::EnumPathResources => "ENUM_PATH_RESOURCES",
            RequestId::AllocatePayload => "ALLOCATE_PAYLOAD",
            RequestId::QueryPayload => "QUERY_PAYLOAD",
            RequestId::ResourceStatusNotify => "RESOURCE_STATUS_NOTIFY",
            RequestId::ClearPayloadIdTable => "CLEAR_PAYLOAD_ID_TABLE",
            RequestId::RemoteDpcdRead => "REMOTE_DPCD_READ",
            RequestId::RemoteDpcdWrite => "REMOTE_DPCD_WRITE",
            RequestId::RemoteI2cRead => "REMOTE_I2C_READ",
            RequestId::RemoteI2cWrite => "REMOTE_I2C_WRITE",
            RequestId::PowerUpPhy => "POWER_UP_PHY",
            RequestId::PowerDownPhy => "POWER_DOWN_PHY",
            RequestId::SinkEventNotify => "SINK_EVENT_NOTIFY",
            RequestId::QueryStreamEncryptionStatus => "QUERY_STREAM_ENCRYPTION_STATUS",
        }
    }
}

/// Name of the request carried by body byte `value`, or `""` when unknown.
pub fn request_name(value: u8) -> &'static str {
    RequestId::from_u8(value).map_or("", RequestId::name)
}
