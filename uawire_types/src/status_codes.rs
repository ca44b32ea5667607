// This file is @generated from the StatusCode table of the OPC UA
// specification (Opc.Ua.StatusCodes.csv). Do not edit by hand.

/// Code/symbol pairs sorted by code for binary search.
pub(crate) static STATUS_CODE_NAMES: &[(u32, &str)] = &[
    (0x0000_0000, "Good"),
    (0x002D_0000, "Good_SubscriptionTransferred"),
    (0x002E_0000, "Good_CompletesAsynchronously"),
    (0x002F_0000, "Good_Overload"),
    (0x0030_0000, "Good_Clamped"),
    (0x0096_0000, "Good_LocalOverride"),
    (0x00A2_0000, "Good_EntryInserted"),
    (0x00A3_0000, "Good_EntryReplaced"),
    (0x00A5_0000, "Good_NoData"),
    (0x00A6_0000, "Good_MoreData"),
    (0x00A7_0000, "Good_CommunicationEvent"),
    (0x00A8_0000, "Good_ShutdownEvent"),
    (0x00A9_0000, "Good_CallAgain"),
    (0x00AA_0000, "Good_NonCriticalTimeout"),
    (0x00BA_0000, "Good_ResultsMayBeIncomplete"),
    (0x00D9_0000, "Good_DataIgnored"),
    (0x00DC_0000, "Good_Edited"),
    (0x00DD_0000, "Good_PostActionFailed"),
    (0x00DF_0000, "Good_RetransmissionQueueNotSupported"),
    (0x00E0_0000, "Good_DependentValueChanged"),
    (0x4000_0000, "Uncertain"),
    (0x406C_0000, "Uncertain_ReferenceOutOfServer"),
    (0x408F_0000, "Uncertain_NoCommunicationLastUsableValue"),
    (0x4090_0000, "Uncertain_LastUsableValue"),
    (0x4091_0000, "Uncertain_SubstituteValue"),
    (0x4092_0000, "Uncertain_InitialValue"),
    (0x4093_0000, "Uncertain_SensorNotAccurate"),
    (0x4094_0000, "Uncertain_EngineeringUnitsExceeded"),
    (0x4095_0000, "Uncertain_SubNormal"),
    (0x40A4_0000, "Uncertain_DataSubNormal"),
    (0x40BC_0000, "Uncertain_ReferenceNotDeleted"),
    (0x40C0_0000, "Uncertain_NotAllNodesAvailable"),
    (0x40DE_0000, "Uncertain_DominantValueChanged"),
    (0x40E2_0000, "Uncertain_DependentValueChanged"),
    (0x8000_0000, "Bad"),
    (0x8001_0000, "Bad_UnexpectedError"),
    (0x8002_0000, "Bad_InternalError"),
    (0x8003_0000, "Bad_OutOfMemory"),
    (0x8004_0000, "Bad_ResourceUnavailable"),
    (0x8005_0000, "Bad_CommunicationError"),
    (0x8006_0000, "Bad_EncodingError"),
    (0x8007_0000, "Bad_DecodingError"),
    (0x8008_0000, "Bad_EncodingLimitsExceeded"),
    (0x8009_0000, "Bad_UnknownResponse"),
    (0x800A_0000, "Bad_Timeout"),
    (0x800B_0000, "Bad_ServiceUnsupported"),
    (0x800C_0000, "Bad_Shutdown"),
    (0x800D_0000, "Bad_ServerNotConnected"),
    (0x800E_0000, "Bad_ServerHalted"),
    (0x800F_0000, "Bad_NothingToDo"),
    (0x8010_0000, "Bad_TooManyOperations"),
    (0x8011_0000, "Bad_DataTypeIdUnknown"),
    (0x8012_0000, "Bad_CertificateInvalid"),
    (0x8013_0000, "Bad_SecurityChecksFailed"),
    (0x8014_0000, "Bad_CertificateTimeInvalid"),
    (0x8015_0000, "Bad_CertificateIssuerTimeInvalid"),
    (0x8016_0000, "Bad_CertificateHostNameInvalid"),
    (0x8017_0000, "Bad_CertificateUriInvalid"),
    (0x8018_0000, "Bad_CertificateUseNotAllowed"),
    (0x8019_0000, "Bad_CertificateIssuerUseNotAllowed"),
    (0x801A_0000, "Bad_CertificateUntrusted"),
    (0x801B_0000, "Bad_CertificateRevocationUnknown"),
    (0x801C_0000, "Bad_CertificateIssuerRevocationUnknown"),
    (0x801D_0000, "Bad_CertificateRevoked"),
    (0x801E_0000, "Bad_CertificateIssuerRevoked"),
    (0x801F_0000, "Bad_UserAccessDenied"),
    (0x8020_0000, "Bad_IdentityTokenInvalid"),
    (0x8021_0000, "Bad_IdentityTokenRejected"),
    (0x8022_0000, "Bad_SecureChannelIdInvalid"),
    (0x8023_0000, "Bad_InvalidTimestamp"),
    (0x8024_0000, "Bad_NonceInvalid"),
    (0x8025_0000, "Bad_SessionIdInvalid"),
    (0x8026_0000, "Bad_SessionClosed"),
    (0x8027_0000, "Bad_SessionNotActivated"),
    (0x8028_0000, "Bad_SubscriptionIdInvalid"),
    (0x802A_0000, "Bad_RequestHeaderInvalid"),
    (0x802B_0000, "Bad_TimestampsToReturnInvalid"),
    (0x802C_0000, "Bad_RequestCancelledByClient"),
    (0x8031_0000, "Bad_NoCommunication"),
    (0x8032_0000, "Bad_WaitingForInitialData"),
    (0x8033_0000, "Bad_NodeIdInvalid"),
    (0x8034_0000, "Bad_NodeIdUnknown"),
    (0x8035_0000, "Bad_AttributeIdInvalid"),
    (0x8036_0000, "Bad_IndexRangeInvalid"),
    (0x8037_0000, "Bad_IndexRangeNoData"),
    (0x8038_0000, "Bad_DataEncodingInvalid"),
    (0x8039_0000, "Bad_DataEncodingUnsupported"),
    (0x803A_0000, "Bad_NotReadable"),
    (0x803B_0000, "Bad_NotWritable"),
    (0x803C_0000, "Bad_OutOfRange"),
    (0x803D_0000, "Bad_NotSupported"),
    (0x803E_0000, "Bad_NotFound"),
    (0x803F_0000, "Bad_ObjectDeleted"),
    (0x8040_0000, "Bad_NotImplemented"),
    (0x8041_0000, "Bad_MonitoringModeInvalid"),
    (0x8042_0000, "Bad_MonitoredItemIdInvalid"),
    (0x8043_0000, "Bad_MonitoredItemFilterInvalid"),
    (0x8044_0000, "Bad_MonitoredItemFilterUnsupported"),
    (0x8045_0000, "Bad_FilterNotAllowed"),
    (0x8046_0000, "Bad_StructureMissing"),
    (0x8047_0000, "Bad_EventFilterInvalid"),
    (0x8048_0000, "Bad_ContentFilterInvalid"),
    (0x8049_0000, "Bad_FilterOperandInvalid"),
    (0x804A_0000, "Bad_ContinuationPointInvalid"),
    (0x804B_0000, "Bad_NoContinuationPoints"),
    (0x804C_0000, "Bad_ReferenceTypeIdInvalid"),
    (0x804D_0000, "Bad_BrowseDirectionInvalid"),
    (0x804E_0000, "Bad_NodeNotInView"),
    (0x804F_0000, "Bad_ServerUriInvalid"),
    (0x8050_0000, "Bad_ServerNameMissing"),
    (0x8051_0000, "Bad_DiscoveryUrlMissing"),
    (0x8052_0000, "Bad_SempahoreFileMissing"),
    (0x8053_0000, "Bad_RequestTypeInvalid"),
    (0x8054_0000, "Bad_SecurityModeRejected"),
    (0x8055_0000, "Bad_SecurityPolicyRejected"),
    (0x8056_0000, "Bad_TooManySessions"),
    (0x8057_0000, "Bad_UserSignatureInvalid"),
    (0x8058_0000, "Bad_ApplicationSignatureInvalid"),
    (0x8059_0000, "Bad_NoValidCertificates"),
    (0x805A_0000, "Bad_RequestCancelledByRequest"),
    (0x805B_0000, "Bad_ParentNodeIdInvalid"),
    (0x805C_0000, "Bad_ReferenceNotAllowed"),
    (0x805D_0000, "Bad_NodeIdRejected"),
    (0x805E_0000, "Bad_NodeIdExists"),
    (0x805F_0000, "Bad_NodeClassInvalid"),
    (0x8060_0000, "Bad_BrowseNameInvalid"),
    (0x8061_0000, "Bad_BrowseNameDuplicated"),
    (0x8062_0000, "Bad_NodeAttributesInvalid"),
    (0x8063_0000, "Bad_TypeDefinitionInvalid"),
    (0x8064_0000, "Bad_SourceNodeIdInvalid"),
    (0x8065_0000, "Bad_TargetNodeIdInvalid"),
    (0x8066_0000, "Bad_DuplicateReferenceNotAllowed"),
    (0x8067_0000, "Bad_InvalidSelfReference"),
    (0x8068_0000, "Bad_ReferenceLocalOnly"),
    (0x8069_0000, "Bad_NoDeleteRights"),
    (0x806A_0000, "Bad_ServerIndexInvalid"),
    (0x806B_0000, "Bad_ViewIdUnknown"),
    (0x806D_0000, "Bad_TooManyMatches"),
    (0x806E_0000, "Bad_QueryTooComplex"),
    (0x806F_0000, "Bad_NoMatch"),
    (0x8070_0000, "Bad_MaxAgeInvalid"),
    (0x8071_0000, "Bad_HistoryOperationInvalid"),
    (0x8072_0000, "Bad_HistoryOperationUnsupported"),
    (0x8073_0000, "Bad_WriteNotSupported"),
    (0x8074_0000, "Bad_TypeMismatch"),
    (0x8075_0000, "Bad_MethodInvalid"),
    (0x8076_0000, "Bad_ArgumentsMissing"),
    (0x8077_0000, "Bad_TooManySubscriptions"),
    (0x8078_0000, "Bad_TooManyPublishRequests"),
    (0x8079_0000, "Bad_NoSubscription"),
    (0x807A_0000, "Bad_SequenceNumberUnknown"),
    (0x807B_0000, "Bad_MessageNotAvailable"),
    (0x807C_0000, "Bad_InsufficientClientProfile"),
    (0x807D_0000, "Bad_TcpServerTooBusy"),
    (0x807E_0000, "Bad_TcpMessageTypeInvalid"),
    (0x807F_0000, "Bad_TcpSecureChannelUnknown"),
    (0x8080_0000, "Bad_TcpMessageTooLarge"),
    (0x8081_0000, "Bad_TcpNotEnoughResources"),
    (0x8082_0000, "Bad_TcpInternalError"),
    (0x8083_0000, "Bad_TcpEndpointUrlInvalid"),
    (0x8084_0000, "Bad_RequestInterrupted"),
    (0x8085_0000, "Bad_RequestTimeout"),
    (0x8086_0000, "Bad_SecureChannelClosed"),
    (0x8087_0000, "Bad_SecureChannelTokenUnknown"),
    (0x8088_0000, "Bad_SequenceNumberInvalid"),
    (0x8089_0000, "Bad_ConfigurationError"),
    (0x808A_0000, "Bad_NotConnected"),
    (0x808B_0000, "Bad_DeviceFailure"),
    (0x808C_0000, "Bad_SensorFailure"),
    (0x808D_0000, "Bad_OutOfService"),
    (0x808E_0000, "Bad_DeadbandFilterInvalid"),
    (0x8097_0000, "Bad_RefreshInProgress"),
    (0x8098_0000, "Bad_ConditionAlreadyDisabled"),
    (0x8099_0000, "Bad_ConditionDisabled"),
    (0x809A_0000, "Bad_EventIdUnknown"),
    (0x809B_0000, "Bad_NoData"),
    (0x809D_0000, "Bad_DataLost"),
    (0x809E_0000, "Bad_DataUnavailable"),
    (0x809F_0000, "Bad_EntryExists"),
    (0x80A0_0000, "Bad_NoEntryExists"),
    (0x80A1_0000, "Bad_TimestampNotSupported"),
    (0x80AB_0000, "Bad_InvalidArgument"),
    (0x80AC_0000, "Bad_ConnectionRejected"),
    (0x80AD_0000, "Bad_Disconnect"),
    (0x80AE_0000, "Bad_ConnectionClosed"),
    (0x80AF_0000, "Bad_InvalidState"),
    (0x80B0_0000, "Bad_EndOfStream"),
    (0x80B1_0000, "Bad_NoDataAvailable"),
    (0x80B2_0000, "Bad_WaitingForResponse"),
    (0x80B3_0000, "Bad_OperationAbandoned"),
    (0x80B4_0000, "Bad_ExpectedStreamToBlock"),
    (0x80B5_0000, "Bad_WouldBlock"),
    (0x80B6_0000, "Bad_SyntaxError"),
    (0x80B7_0000, "Bad_MaxConnectionsReached"),
    (0x80B8_0000, "Bad_RequestTooLarge"),
    (0x80B9_0000, "Bad_ResponseTooLarge"),
    (0x80BB_0000, "Bad_EventNotAcknowledgeable"),
    (0x80BD_0000, "Bad_InvalidTimestampArgument"),
    (0x80BE_0000, "Bad_ProtocolVersionUnsupported"),
    (0x80BF_0000, "Bad_StateNotActive"),
    (0x80C1_0000, "Bad_FilterOperatorInvalid"),
    (0x80C2_0000, "Bad_FilterOperatorUnsupported"),
    (0x80C3_0000, "Bad_FilterOperandCountMismatch"),
    (0x80C4_0000, "Bad_FilterElementInvalid"),
    (0x80C5_0000, "Bad_FilterLiteralInvalid"),
    (0x80C6_0000, "Bad_IdentityChangeNotSupported"),
    (0x80C8_0000, "Bad_NotTypeDefinition"),
    (0x80C9_0000, "Bad_ViewTimestampInvalid"),
    (0x80CA_0000, "Bad_ViewParameterMismatch"),
    (0x80CB_0000, "Bad_ViewVersionInvalid"),
    (0x80CC_0000, "Bad_ConditionAlreadyEnabled"),
    (0x80CD_0000, "Bad_DialogNotActive"),
    (0x80CE_0000, "Bad_DialogResponseInvalid"),
    (0x80CF_0000, "Bad_ConditionBranchAlreadyAcked"),
    (0x80D0_0000, "Bad_ConditionBranchAlreadyConfirmed"),
    (0x80D1_0000, "Bad_ConditionAlreadyShelved"),
    (0x80D2_0000, "Bad_ConditionNotShelved"),
    (0x80D3_0000, "Bad_ShelvingTimeOutOfRange"),
    (0x80D4_0000, "Bad_AggregateListMismatch"),
    (0x80D5_0000, "Bad_AggregateNotSupported"),
    (0x80D6_0000, "Bad_AggregateInvalidInputs"),
    (0x80D7_0000, "Bad_BoundNotFound"),
    (0x80D8_0000, "Bad_BoundNotSupported"),
    (0x80DA_0000, "Bad_AggregateConfigurationRejected"),
    (0x80DB_0000, "Bad_TooManyMonitoredItems"),
    (0x80E1_0000, "Bad_DominantValueChanged"),
    (0x80E3_0000, "Bad_DependentValueChanged"),
    (0x80E4_0000, "Bad_RequestNotAllowed"),
    (0x80E6_0000, "Bad_SecurityModeInsufficient"),
    (0x810D_0000, "Bad_CertificateChainIncomplete"),
    (0x8111_0000, "Bad_NotExecutable"),
    (0x8113_0000, "Bad_RequestNotComplete"),
    (0x8114_0000, "Bad_CertificatePolicyCheckFailed"),
    (0x8115_0000, "Bad_AlreadyExists"),
];
